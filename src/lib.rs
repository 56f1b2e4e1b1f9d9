pub mod config;
pub mod error;
pub mod leaderboard;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod validation;
pub mod websocket;

use crate::config::Config;
use axum::{Router, http::HeaderValue, middleware::from_fn};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing_subscriber::EnvFilter;

pub fn init_tracing(config: &Config) {
    let logging = config.logging();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .init();
        }
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

/// Full application router with CORS and request logging applied.
pub fn build_app(config: &Config) -> Router {
    routes::create_router()
        .layer(cors_layer(config))
        .layer(from_fn(middleware::logger::logger))
}
