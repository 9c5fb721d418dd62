// src/routes.rs
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir};

use crate::handlers::{api, web};
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ==================
        // WEB UI ROUTES
        // ==================
        .route("/", get(web::index))
        .route("/notice/dismiss", post(web::dismiss_notice))
        // ==================
        // API ROUTES
        // ==================
        .route("/api/health", get(api::health_check))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(axum::middleware::from_fn(
            crate::middleware::security::security_headers,
        ))
        .layer(CompressionLayer::new())
}
