use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    models::api::ApiResponse,
    validation::{ValidatedJson, rules::validate_username_format},
};

#[derive(Debug, Deserialize, Validate)]
pub struct UsernameCheckRequest {
    #[validate(custom(function = "validate_username_format"))]
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct UsernameCheckResponse {
    pub username: String,
    pub valid: bool,
}

/// Pre-registration check of a username candidate.
pub async fn check_username(
    ValidatedJson(payload): ValidatedJson<UsernameCheckRequest>,
) -> impl IntoResponse {
    tracing::debug!(username = %payload.username, "Username accepted");

    let response = ApiResponse::success(
        UsernameCheckResponse {
            username: payload.username,
            valid: true,
        },
        "Username is valid",
    );
    (StatusCode::OK, Json(response))
}
