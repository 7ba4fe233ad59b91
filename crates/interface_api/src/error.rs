//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_rating::{ProfileError, RatingError};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed DTO-level validation
    #[error("Request validation failed")]
    Validation(Vec<String>),

    /// The profile was rejected by domain validation
    #[error("Invalid profile: {0}")]
    InvalidProfile(#[from] ProfileError),

    /// The calculation failed server-side
    ///
    /// A rate table gap is an operator defect, not a client error, so it
    /// surfaces as a 500 rather than a 4xx.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<RatingError> for ApiError {
    fn from(error: RatingError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: {}", error.code),
                })
            })
            .collect();

        ApiError::Validation(details)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::Validation(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                "Request validation failed".to_string(),
                Some(details),
            ),
            ApiError::InvalidProfile(ref error) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_profile",
                error.to_string(),
                None,
            ),
            ApiError::Internal(ref message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message.clone(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
