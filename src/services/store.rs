// src/services/store.rs
use axum::async_trait;
use moka::future::Cache;
use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Arc;
use std::time::Duration;

/// Keys the home page keeps per visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalKey {
    HomePageContent,
    NoticeCloseDate,
}

impl LocalKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocalKey::HomePageContent => "home_page_content",
            LocalKey::NoticeCloseDate => "notice_close_date",
        }
    }
}

/// Key-value capability handed to the home view.
#[async_trait]
pub trait LocalStore: Send + Sync {
    async fn get(&self, key: LocalKey) -> Option<String>;

    async fn set(&self, key: LocalKey, value: String);
}

pub fn generate_visitor_id() -> String {
    let mut random_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut random_bytes);
    hex::encode(random_bytes)
}

// Process-wide store bounded by the bytes it holds; entries also expire after
// the visitor stays away for the idle period
#[derive(Clone)]
pub struct VisitorStore {
    entries: Arc<Cache<(String, LocalKey), String>>,
}

fn entry_weight(key: &(String, LocalKey), value: &String) -> u32 {
    u32::try_from(key.0.len() + value.len()).unwrap_or(u32::MAX)
}

impl VisitorStore {
    pub fn new(idle: Duration, max_bytes: u64) -> Self {
        Self {
            entries: Arc::new(
                Cache::builder()
                    .weigher(entry_weight)
                    .max_capacity(max_bytes)
                    .time_to_idle(idle)
                    .build()
            ),
        }
    }

    pub fn scope(&self, visitor_id: &str) -> VisitorScope {
        VisitorScope {
            entries: self.entries.clone(),
            visitor_id: visitor_id.to_string(),
            keep_content: true,
        }
    }

    /// Scope for a visitor whose cookie is issued by this very request. Such a
    /// client had no placeholder to read, so the content copy is not kept
    /// until it comes back with the cookie.
    pub fn new_visitor_scope(&self, visitor_id: &str) -> VisitorScope {
        VisitorScope {
            keep_content: false,
            ..self.scope(visitor_id)
        }
    }

    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn weighted_size(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.weighted_size()
    }
}

/// One visitor's slice of the store.
#[derive(Clone)]
pub struct VisitorScope {
    entries: Arc<Cache<(String, LocalKey), String>>,
    visitor_id: String,
    keep_content: bool,
}

#[async_trait]
impl LocalStore for VisitorScope {
    async fn get(&self, key: LocalKey) -> Option<String> {
        self.entries.get(&(self.visitor_id.clone(), key)).await
    }

    async fn set(&self, key: LocalKey, value: String) {
        if key == LocalKey::HomePageContent && !self.keep_content {
            tracing::trace!(visitor = %self.visitor_id, "skipping content cache for new visitor");
            return;
        }
        tracing::trace!(visitor = %self.visitor_id, key = key.as_str(), "store set");
        self.entries.insert((self.visitor_id.clone(), key), value).await;
    }
}
