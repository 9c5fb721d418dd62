// src/home/embed.rs
use serde_json::json;

use crate::models::{RenderContext, ThemeMode};

/// A single-key message posted into the embedded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameMessage {
    ThemeMode(ThemeMode),
    Lang(String),
}

impl FrameMessage {
    pub fn to_json(&self) -> String {
        match self {
            FrameMessage::ThemeMode(theme) => json!({ "themeMode": theme.as_str() }),
            FrameMessage::Lang(lang) => json!({ "lang": lang }),
        }
        .to_string()
    }
}

/// Frame embedding primitive. Messages registered through `on_embed_ready`
/// are posted in order, once, after the frame's load event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedFrame {
    src: String,
    on_ready: Vec<FrameMessage>,
}

impl EmbeddedFrame {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            on_ready: Vec::new(),
        }
    }

    pub fn on_embed_ready(mut self, messages: impl IntoIterator<Item = FrameMessage>) -> Self {
        self.on_ready.extend(messages);
        self
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn ready_messages(&self) -> &[FrameMessage] {
        &self.on_ready
    }
}

/// Theme first, then language.
pub fn sync_messages(ctx: &RenderContext) -> Vec<FrameMessage> {
    vec![
        FrameMessage::ThemeMode(ctx.theme),
        FrameMessage::Lang(ctx.lang.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_shapes() {
        assert_eq!(
            FrameMessage::ThemeMode(ThemeMode::Dark).to_json(),
            r#"{"themeMode":"dark"}"#
        );
        assert_eq!(FrameMessage::Lang("en".to_string()).to_json(), r#"{"lang":"en"}"#);
    }

    #[test]
    fn test_sync_messages_order() {
        let ctx = RenderContext {
            theme: ThemeMode::Light,
            lang: "zh-CN".to_string(),
        };
        let frame = EmbeddedFrame::new("https://example.com").on_embed_ready(sync_messages(&ctx));

        assert_eq!(
            frame.ready_messages(),
            &[
                FrameMessage::ThemeMode(ThemeMode::Light),
                FrameMessage::Lang("zh-CN".to_string()),
            ]
        );
    }
}
