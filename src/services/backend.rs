// src/services/backend.rs
use axum::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::models::ApiEnvelope;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned HTTP {0}")]
    Status(StatusCode),
    #[error("invalid backend response: {0}")]
    Decode(String),
}

/// Read access to the platform endpoints the home page depends on.
#[async_trait]
pub trait HomeApi: Send + Sync {
    async fn home_page_content(&self) -> Result<ApiEnvelope<String>, BackendError>;

    async fn notice(&self) -> Result<ApiEnvelope<String>, BackendError>;
}

#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: url::Url,
}

impl BackendClient {
    pub fn new(mut base_url: url::Url, timeout: Duration) -> Result<Self, BackendError> {
        // Endpoint paths are joined relative to the base, so it must end in a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<url::Url, BackendError> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::Decode(format!("bad endpoint {}: {}", path, e)))
    }

    async fn get_envelope(&self, path: &str) -> Result<ApiEnvelope<String>, BackendError> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[async_trait]
impl HomeApi for BackendClient {
    async fn home_page_content(&self) -> Result<ApiEnvelope<String>, BackendError> {
        self.get_envelope("api/home_page_content").await
    }

    async fn notice(&self) -> Result<ApiEnvelope<String>, BackendError> {
        self.get_envelope("api/notice").await
    }
}
