// src/home/mod.rs
//! The home page view: two independent loads per mount and a conditional
//! render decided by the content load.

pub mod content;
pub mod embed;

use tracing::{debug, error, warn};

use crate::models::{HomePageContent, RenderContext, Toast};
use crate::services::backend::HomeApi;
use crate::services::clock::Clock;
use crate::services::store::{LocalKey, LocalStore};
use crate::templates::copy::CONTENT_LOAD_FAILED;

use self::content::{markdown_to_html, prepare_content};
use self::embed::{sync_messages, EmbeddedFrame};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub visible: bool,
    /// Notice body converted to HTML, empty when hidden.
    pub html: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentState {
    pub loaded: bool,
    pub content: String,
    pub toast: Option<Toast>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    pub notice: NoticeState,
    pub content: ContentState,
}

/// What the page body shows after mounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeBody {
    Frame(EmbeddedFrame),
    Html(String),
    Landing,
}

impl HomeState {
    pub fn body(&self, ctx: &RenderContext) -> HomeBody {
        if !self.content.loaded {
            return HomeBody::Landing;
        }

        match HomePageContent::classify(&self.content.content) {
            HomePageContent::Empty => HomeBody::Landing,
            HomePageContent::Url(src) => {
                HomeBody::Frame(EmbeddedFrame::new(src).on_embed_ready(sync_messages(ctx)))
            }
            HomePageContent::Markup(html) => HomeBody::Html(html),
        }
    }

    pub fn toasts(&self) -> Vec<&Toast> {
        self.content.toast.iter().collect()
    }
}

pub struct HomeView<'a> {
    api: &'a dyn HomeApi,
    store: &'a dyn LocalStore,
    clock: &'a dyn Clock,
}

impl<'a> HomeView<'a> {
    pub fn new(api: &'a dyn HomeApi, store: &'a dyn LocalStore, clock: &'a dyn Clock) -> Self {
        Self { api, store, clock }
    }

    /// Runs both loads concurrently; they write disjoint keys.
    pub async fn mount(&self) -> HomeState {
        let (notice, content) = tokio::join!(self.load_notice(), self.load_home_content());
        HomeState { notice, content }
    }

    pub async fn load_notice(&self) -> NoticeState {
        let today = self.clock.today_string();
        if self.store.get(LocalKey::NoticeCloseDate).await.as_deref() == Some(today.as_str()) {
            debug!("Notice already dismissed today");
            return NoticeState::default();
        }

        match self.api.notice().await {
            Ok(res) if res.success && !res.data.trim().is_empty() => NoticeState {
                visible: true,
                html: markdown_to_html(&res.data),
            },
            Ok(_) => NoticeState::default(),
            Err(e) => {
                error!("Failed to fetch notice: {}", e);
                NoticeState::default()
            }
        }
    }

    pub async fn load_home_content(&self) -> ContentState {
        let mut state = ContentState {
            loaded: false,
            content: self
                .store
                .get(LocalKey::HomePageContent)
                .await
                .unwrap_or_default(),
            toast: None,
        };

        match self.api.home_page_content().await {
            Ok(res) if res.success => {
                let content = prepare_content(&res.data);
                self.store
                    .set(LocalKey::HomePageContent, content.clone())
                    .await;
                state.content = content;
            }
            Ok(res) => {
                warn!("Home page content rejected by backend: {}", res.message);
                state.toast = Some(Toast::error(res.message));
            }
            Err(e) => {
                warn!("Failed to fetch home page content: {}", e);
                state.toast = Some(Toast::error(CONTENT_LOAD_FAILED));
            }
        }

        state.loaded = true;
        state
    }
}
