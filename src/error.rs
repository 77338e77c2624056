//! Error types shared across the forms, gateway and HTTP backend

use crate::state::Violation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Rejected field configuration, raised when a form is constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum length {min} exceeds maximum length {max}")]
    InvertedBounds { min: usize, max: usize },
}

/// Failure while talking to a submission gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("gateway responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("gateway did not respond within {0:?}")]
    TimedOut(Duration),
}

/// Errors surfaced by the HTTP backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid submission")]
    Invalid(Vec<Violation>),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Not found")]
    NotFound,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Form misconfigured: {0}")]
    Config(#[from] ConfigError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::Invalid(violations) => {
                let body = json!({
                    "error": message,
                    "violations": violations,
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::MalformedPayload(_) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::NotFound => (StatusCode::NOT_FOUND, message).into_response(),
            ApiError::Upstream(_) => (StatusCode::BAD_GATEWAY, message).into_response(),
            ApiError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, message).into_response(),
        }
    }
}
