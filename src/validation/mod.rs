pub mod username;

use axum::{
    async_trait,
    extract::FromRequest,
    http::Request,
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::{error::AppError, models::api::ErrorDetail};

pub use username::{
    InvalidUsername, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH, Username, is_valid_username,
    validate_username,
};

/// JSON extractor that runs `validator` rules before the handler sees the body.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<axum::body::Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Rejected request body");
                AppError::validation("Invalid JSON format")
            })?;

        value
            .validate()
            .map_err(|errors| AppError::ValidationErrors(error_details(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flattens field errors into the response format, sorted by field name.
pub fn error_details(errors: &ValidationErrors) -> Vec<ErrorDetail> {
    let mut details: Vec<ErrorDetail> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| ErrorDetail {
                field: Some(field.to_string()),
                code: error.code.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation failed for field: {}", field)),
            })
        })
        .collect();
    details.sort_by(|a, b| a.field.cmp(&b.field));
    details
}

/// Custom rules usable from `#[validate(custom(function = ...))]`.
pub mod rules {
    use validator::ValidationError;

    pub fn validate_username_format(username: &str) -> Result<(), ValidationError> {
        super::validate_username(username).map(|_| ()).map_err(|err| {
            let mut error = ValidationError::new("invalid_username");
            error.message = Some(err.message().into());
            error
        })
    }
}
