// src/templates/mod.rs
pub mod copy;
pub mod home;
pub mod notice;

mod layout;

pub use layout::render_page;

// Helper function for HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// JSON embedded in an inline script must not be able to close the tag.
pub fn script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_script_json_cannot_close_tag() {
        let out = script_json(r#"{"lang":"</script><script>"}"#);
        assert!(!out.contains("</script>"));
        assert_eq!(out, r#"{"lang":"\u003c/script\u003e\u003cscript\u003e"}"#);
    }
}
