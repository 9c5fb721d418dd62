// src/models.rs
use serde::{Deserialize, Serialize};

/// Literal prefix that marks homepage content as an embeddable URL.
pub const EMBED_URL_PREFIX: &str = "https://";

// Backend response envelope shared by every /api endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Anything other than an explicit light/dark choice (including "auto")
    /// yields `None` so the caller can apply its default.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Theme and language of the visitor, forwarded into embedded frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub theme: ThemeMode,
    pub lang: String,
}

/// Homepage content after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomePageContent {
    Empty,
    Url(String),
    Markup(String),
}

impl HomePageContent {
    pub fn classify(value: &str) -> Self {
        if value.is_empty() {
            HomePageContent::Empty
        } else if value.starts_with(EMBED_URL_PREFIX) {
            HomePageContent::Url(value.to_string())
        } else {
            HomePageContent::Markup(value.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Error,
}

// User-visible notification rendered at the top of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_content() {
        assert_eq!(HomePageContent::classify(""), HomePageContent::Empty);
        assert_eq!(
            HomePageContent::classify("https://example.com/page"),
            HomePageContent::Url("https://example.com/page".to_string())
        );
        // Only the secure scheme counts as a URL
        assert!(matches!(
            HomePageContent::classify("http://example.com"),
            HomePageContent::Markup(_)
        ));
    }

    #[test]
    fn test_envelope_without_message() {
        let env: ApiEnvelope<String> =
            serde_json::from_str(r#"{"success":true,"data":"hi"}"#).unwrap();
        assert!(env.success);
        assert_eq!(env.message, "");
        assert_eq!(env.data, "hi");
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("auto"), None);
    }
}
