// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;

use crate::models::ThemeMode;

// About ten years, well inside what the visitor cache accepts as an idle period
const MAX_VISITOR_TTL_DAYS: u64 = 3650;
const SECS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub backend_url: url::Url,
    pub backend_timeout_secs: u64,
    pub default_theme: ThemeMode,
    pub default_lang: String,
    pub console_path: String,
    pub contact_email: String,
    pub visitor_ttl_days: u64,
    pub visitor_store_max_bytes: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let default_theme = std::env::var("DEFAULT_THEME").unwrap_or_else(|_| "dark".to_string());

        Ok(Self {
            host: std::env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            backend_url: std::env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3001".to_string())
                .parse()?,
            backend_timeout_secs: std::env::var("BACKEND_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
            default_theme: ThemeMode::parse(&default_theme)
                .ok_or_else(|| format!("DEFAULT_THEME must be light or dark, got {}", default_theme))?,
            default_lang: std::env::var("DEFAULT_LANG")
                .unwrap_or_else(|_| "zh".to_string()),
            console_path: std::env::var("CONSOLE_PATH")
                .unwrap_or_else(|_| "/console".to_string()),
            contact_email: std::env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "support@whalehub.cn".to_string()),
            visitor_ttl_days: std::env::var("VISITOR_TTL_DAYS")
                .unwrap_or_else(|_| "30".to_string()) // a month of inactivity
                .parse()?,
            visitor_store_max_bytes: std::env::var("VISITOR_STORE_MAX_BYTES")
                .unwrap_or_else(|_| "67108864".to_string()) // 64MB
                .parse()?,
        })
    }

    pub fn server_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }

    /// Idle period of a visitor's stored values, also the cookie lifetime.
    pub fn visitor_ttl(&self) -> Duration {
        let days = self.visitor_ttl_days.min(MAX_VISITOR_TTL_DAYS);
        Duration::from_secs(days.saturating_mul(SECS_PER_DAY))
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests(backend_url: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            backend_url: backend_url.parse().expect("test backend url"),
            backend_timeout_secs: 2,
            default_theme: ThemeMode::Dark,
            default_lang: "zh".to_string(),
            console_path: "/console".to_string(),
            contact_email: "support@whalehub.cn".to_string(),
            visitor_ttl_days: 1,
            visitor_store_max_bytes: 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_ttl() {
        let mut config = Config::for_tests("http://127.0.0.1:1");
        assert_eq!(config.visitor_ttl(), Duration::from_secs(SECS_PER_DAY));

        config.visitor_ttl_days = u64::MAX;
        assert_eq!(
            config.visitor_ttl(),
            Duration::from_secs(MAX_VISITOR_TTL_DAYS * SECS_PER_DAY)
        );
    }
}
