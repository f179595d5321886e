//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for registration (POST /users)
///
/// Both fields are optional at the wire level so a missing field maps to
/// the endpoint's own rejection message rather than a deserialization
/// failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Login identity
    #[serde(default)]
    pub email: Option<String>,
    /// Plaintext password, hashed before storage
    #[serde(default)]
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Validates the request data.
    ///
    /// Returns the rejection message if a field is missing or empty,
    /// None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.email.as_deref().map_or(true, str::is_empty) {
            return Some("Missing email".to_string());
        }
        if self.password.as_deref().map_or(true, str::is_empty) {
            return Some("Missing password".to_string());
        }
        None
    }
}
