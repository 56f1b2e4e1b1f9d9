pub mod auth;

use crate::models::api::ApiResponse;
use axum::{
    Json, Router,
    routing::{get, post},
};

pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/username/check", post(auth::check_username))
}

async fn health() -> Json<ApiResponse<()>> {
    Json(ApiResponse::ok("OK"))
}
