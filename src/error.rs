//! Error types for the authentication gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Auth Error Enum ==
/// Unified error type for the authentication gateway.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Credentials or token rejected.
    ///
    /// Carries no detail about which check failed: a missing header, an
    /// unknown identity, a wrong password, and a dead token all produce
    /// the same response shape.
    #[error("Unauthorized")]
    Unauthorized,

    /// Invalid request data
    #[error("{0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AuthError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AuthError::Internal(msg) => {
                // Detail goes to the log only; the body stays generic.
                error!("internal fault: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, AuthError>;
