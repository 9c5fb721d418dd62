// src/home/content.rs
use pulldown_cmark::{html, Options, Parser};

use crate::models::EMBED_URL_PREFIX;

pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Turns the raw backend payload into the value that is displayed and cached.
/// URLs pass through untouched, everything else is treated as Markdown.
pub fn prepare_content(data: &str) -> String {
    if data.starts_with(EMBED_URL_PREFIX) {
        data.to_string()
    } else {
        markdown_to_html(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_passes_through() {
        assert_eq!(
            prepare_content("https://example.com/page"),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_markdown_heading() {
        assert_eq!(prepare_content("# Hello"), "<h1>Hello</h1>\n");
    }

    #[test]
    fn test_inline_html_is_kept() {
        let out = prepare_content("<div class=\"banner\">Hi</div>");
        assert!(out.contains("<div class=\"banner\">Hi</div>"));
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(prepare_content(""), "");
    }

    #[test]
    fn test_tables_enabled() {
        let out = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(out.contains("<table>"));
    }
}
