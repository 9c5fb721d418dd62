// src/templates/layout.rs
use super::html_escape;
use crate::models::{RenderContext, Toast, ToastLevel};

pub fn render_page(title: &str, content: &str, ctx: &RenderContext, toasts: &[&Toast]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{}" data-theme="{}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} - WhaleHub</title>
    <link rel="stylesheet" href="/static/css/home.css">
</head>
<body>
    {}
    {}
</body>
</html>"#,
        html_escape(&ctx.lang),
        ctx.theme.as_str(),
        html_escape(title),
        render_toasts(toasts),
        content
    )
}

fn render_toasts(toasts: &[&Toast]) -> String {
    if toasts.is_empty() {
        return String::new();
    }

    let items = toasts
        .iter()
        .map(|toast| {
            let class = match toast.level {
                ToastLevel::Error => "toast toast-error",
            };
            format!(
                r#"<div class="{}" role="alert">{}</div>"#,
                class,
                html_escape(&toast.message)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(r#"<div class="toasts">{}</div>"#, items)
}
