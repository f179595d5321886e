//! Request Extractors
//!
//! Pulls credentials and session tokens out of request headers. Both
//! extractors reject with the uniform `Unauthorized` error, so a missing
//! or malformed header is indistinguishable from a bad credential
//! downstream.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::AuthError;

// == Basic Credentials ==
/// Identity/password pair from an `Authorization: Basic ...` header.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for BasicCredentials
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::Unauthorized)?;

        let encoded = header_value
            .strip_prefix("Basic ")
            .ok_or(AuthError::Unauthorized)?;

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AuthError::Unauthorized)?;
        let pair = String::from_utf8(decoded).map_err(|_| AuthError::Unauthorized)?;

        // Identity must be non-empty; the password may legitimately contain ':'
        let (email, password) = pair.split_once(':').ok_or(AuthError::Unauthorized)?;
        if email.is_empty() {
            return Err(AuthError::Unauthorized);
        }

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

// == Session Token ==
/// Session token from the `X-Token` header.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("x-token")
            .and_then(|v| v.to_str().ok())
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::Unauthorized)?;

        Ok(Self(token.to_string()))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_for(builder: axum::http::request::Builder) -> Parts {
        let request: Request<()> = builder.body(()).unwrap();
        request.into_parts().0
    }

    fn basic(email: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
    }

    #[tokio::test]
    async fn test_basic_credentials_parse() {
        let mut parts = parts_for(
            Request::builder()
                .uri("/connect")
                .header("authorization", basic("u@x.com", "p")),
        );

        let creds = BasicCredentials::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(creds.email, "u@x.com");
        assert_eq!(creds.password, "p");
    }

    #[tokio::test]
    async fn test_basic_credentials_password_with_colon() {
        let mut parts = parts_for(
            Request::builder()
                .uri("/connect")
                .header("authorization", basic("u@x.com", "a:b:c")),
        );

        let creds = BasicCredentials::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(creds.password, "a:b:c");
    }

    #[tokio::test]
    async fn test_basic_credentials_missing_header() {
        let mut parts = parts_for(Request::builder().uri("/connect"));

        let result = BasicCredentials::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_basic_credentials_wrong_scheme() {
        let mut parts = parts_for(
            Request::builder()
                .uri("/connect")
                .header("authorization", "Bearer sometoken"),
        );

        let result = BasicCredentials::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_basic_credentials_bad_base64() {
        let mut parts = parts_for(
            Request::builder()
                .uri("/connect")
                .header("authorization", "Basic !!!not-base64!!!"),
        );

        let result = BasicCredentials::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_basic_credentials_no_separator() {
        let encoded = STANDARD.encode("no-colon-here");
        let mut parts = parts_for(
            Request::builder()
                .uri("/connect")
                .header("authorization", format!("Basic {encoded}")),
        );

        let result = BasicCredentials::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_session_token_parse() {
        let mut parts = parts_for(
            Request::builder()
                .uri("/disconnect")
                .header("x-token", "abc123"),
        );

        let SessionToken(token) = SessionToken::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(token, "abc123");
    }

    #[tokio::test]
    async fn test_session_token_missing() {
        let mut parts = parts_for(Request::builder().uri("/disconnect"));

        let result = SessionToken::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_session_token_empty() {
        let mut parts = parts_for(
            Request::builder()
                .uri("/disconnect")
                .header("x-token", ""),
        );

        let result = SessionToken::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }
}
