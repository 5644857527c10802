pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod models;
pub mod routes;
pub mod email;

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;
use crate::email::Mailer;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config, mailer: Arc<dyn Mailer>) -> Router {
    // Either locked to the configured frontend origin or open to any caller,
    // depending on deployment
    let cors = match &config.allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(origin.clone()))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]),
        None => CorsLayer::permissive(),
    };

    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        mailer,
    });

    Router::new()
        .merge(routes::routes())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}
