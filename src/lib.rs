//! LAMFO Website Backend
//!
//! Serves the laboratory's members and projects from static TOML content, accepts budget
//! requests and relays chat messages to an external service.

pub mod api;
pub mod budget;
pub mod chat;
pub mod config;
pub mod content;
pub mod errors;
pub mod filter;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use chat::ChatRelay;
use content::ContentStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub chat: Arc<ChatRelay>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Members
        .route("/members", get(api::list_members))
        .route("/members/{identifier}", get(api::get_member))
        // Projects
        .route("/projects", get(api::list_projects))
        .route("/projects/{identifier}", get(api::get_project))
        .route("/identifiers", get(api::list_identifiers))
        // Forms
        .route("/budget", post(api::submit_budget))
        .route("/chat", post(api::send_chat_message));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
