// src/handlers/web.rs
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;
use time::Duration as TimeDuration;

use crate::config::Config;
use crate::home::HomeView;
use crate::models::{RenderContext, ThemeMode};
use crate::services::store::{generate_visitor_id, LocalKey, LocalStore};
use crate::templates;
use crate::templates::home::SiteLinks;
use crate::AppState;

pub const VISITOR_COOKIE: &str = "visitor_id";
pub const THEME_COOKIE: &str = "theme-mode";
pub const LANG_COOKIE: &str = "lang";

pub struct Visitor {
    pub id: String,
    /// The cookie is issued by this request.
    pub is_new: bool,
}

/// Returns the visitor, issuing a cookie for first-time visitors.
fn ensure_visitor(jar: CookieJar, config: &Config) -> (CookieJar, Visitor) {
    if let Some(cookie) = jar.get(VISITOR_COOKIE) {
        if !cookie.value().is_empty() {
            let id = cookie.value().to_string();
            return (jar, Visitor { id, is_new: false });
        }
    }

    let id = generate_visitor_id();
    tracing::debug!("New visitor {}", id);
    let max_age = i64::try_from(config.visitor_ttl().as_secs()).unwrap_or(i64::MAX);
    let cookie = Cookie::build((VISITOR_COOKIE, id.clone()))
        .path("/")
        .max_age(TimeDuration::seconds(max_age))
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    (jar.add(cookie), Visitor { id, is_new: true })
}

pub fn render_context(jar: &CookieJar, headers: &HeaderMap, config: &Config) -> RenderContext {
    let theme = jar
        .get(THEME_COOKIE)
        .and_then(|c| ThemeMode::parse(c.value()))
        .unwrap_or(config.default_theme);

    let lang = jar
        .get(LANG_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|l| !l.is_empty())
        .or_else(|| {
            headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok())
                .and_then(first_language_tag)
        })
        .unwrap_or_else(|| config.default_lang.clone());

    RenderContext { theme, lang }
}

fn first_language_tag(accept_language: &str) -> Option<String> {
    accept_language
        .split(',')
        .next()
        .and_then(|tag| tag.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != "*")
        .map(str::to_string)
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> (CookieJar, Html<String>) {
    let (jar, visitor) = ensure_visitor(jar, &state.config);
    let ctx = render_context(&jar, &headers, &state.config);

    let store = if visitor.is_new {
        state.visitors.new_visitor_scope(&visitor.id)
    } else {
        state.visitors.scope(&visitor.id)
    };
    let view = HomeView::new(state.backend.as_ref(), &store, state.clock.as_ref());
    let home = view.mount().await;

    let links = SiteLinks {
        console_path: &state.config.console_path,
        contact_email: &state.config.contact_email,
    };

    (jar, Html(templates::home::render(&home, &ctx, &links)))
}

/// "Close for today": hides the notice until the date changes.
pub async fn dismiss_notice(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let (jar, visitor) = ensure_visitor(jar, &state.config);
    let today = state.clock.today_string();

    state
        .visitors
        .scope(&visitor.id)
        .set(LocalKey::NoticeCloseDate, today.clone())
        .await;
    tracing::info!("Notice dismissed for {} by {}", today, visitor.id);

    (jar, Redirect::to("/"))
}
