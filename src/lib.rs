use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod demo {
    pub mod models;
    pub mod fixtures;
    pub mod registry;
    pub mod citation;
    pub mod view_state;
    pub mod timers;
    pub mod config;
    pub mod popover;
    pub mod session;
}
pub mod handlers {
    pub mod waitlist_dtos;
    pub mod waitlist_handlers;
}
pub mod utils {
    pub mod webhook;
}
pub mod config;
pub mod error;

pub use demo::config::{DemoConfig, DemoVariant};
pub use demo::session::DemoSession;

use config::WebhookConfig;
use handlers::waitlist_handlers;
use utils::webhook::WebhookClient;

pub struct AppState {
    pub webhooks: WebhookConfig,
    pub webhook_client: WebhookClient,
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub fn app_router(state: Arc<AppState>, cors_origin: HeaderValue) -> Router {
    Router::new()
        .route("/api/health", get(health_check).fallback(error::method_not_allowed))
        .route(
            "/api/register",
            post(waitlist_handlers::register).fallback(error::method_not_allowed),
        )
        .route(
            "/api/status",
            get(waitlist_handlers::status).fallback(error::method_not_allowed),
        )
        .route(
            "/api/waitlist",
            get(waitlist_handlers::waitlist_get)
                .post(waitlist_handlers::waitlist_post)
                .fallback(error::method_not_allowed),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(AllowOrigin::exact(cors_origin))
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ]),
        )
        .with_state(state)
}
