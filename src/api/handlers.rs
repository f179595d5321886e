//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tokio::sync::RwLock;
use tracing::info;

use super::extract::{BasicCredentials, SessionToken};
use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{AuthError, Result};
use crate::models::{HealthResponse, RegisterRequest, StatsResponse, TokenResponse, UserResponse};
use crate::token::TokenService;
use crate::users::{hash_password, verify_password, CredentialStore, MemoryCredentialStore};

/// Application state shared across all handlers.
///
/// Every collaborator is constructed at startup and injected here, so tests
/// can stand up isolated instances without shared global state.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe token cache
    pub cache: Arc<RwLock<CacheStore>>,
    /// Credential store for registered identities
    pub users: Arc<dyn CredentialStore>,
    /// Token issuance and validation over the cache
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new AppState over the given credential store.
    ///
    /// `session_ttl` is the issued-token lifetime in seconds, 0 = no expiry.
    pub fn new(users: Arc<dyn CredentialStore>, session_ttl: u64) -> Self {
        let cache = Arc::new(RwLock::new(CacheStore::new()));
        let tokens = TokenService::new(cache.clone(), session_ttl);
        Self {
            cache,
            users,
            tokens,
        }
    }

    /// Creates a new AppState from configuration, with an in-memory
    /// credential store.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(MemoryCredentialStore::new()), config.session_ttl)
    }
}

/// Handler for POST /users
///
/// Registers a new identity. Rejects missing fields and duplicate
/// identities; stores only the password digest.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(AuthError::InvalidRequest(error_msg));
    }
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    if state.users.exists(&email).await? {
        return Err(AuthError::InvalidRequest("Already exist".to_string()));
    }

    let user = state.users.insert(&email, &hash_password(&password)).await?;
    info!("registered identity {}", user.email);

    Ok((StatusCode::CREATED, Json(UserResponse::new(user.id, user.email))))
}

/// Handler for GET /connect
///
/// Verifies basic credentials and issues a session token. Every failure
/// path produces the same `Unauthorized` response, whichever check failed.
pub async fn connect_handler(
    State(state): State<AppState>,
    credentials: BasicCredentials,
) -> Result<Json<TokenResponse>> {
    let user = state
        .users
        .find_by_email(&credentials.email)
        .await?
        .ok_or(AuthError::Unauthorized)?;

    if !verify_password(&credentials.password, &user.password_hash) {
        return Err(AuthError::Unauthorized);
    }

    let token = state.tokens.issue(&user.email).await;
    Ok(Json(TokenResponse::new(token)))
}

/// Handler for GET /disconnect
///
/// Revokes the presented session token. Succeeds with 204 and an empty
/// body; an unknown or expired token is `Unauthorized`.
pub async fn disconnect_handler(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<StatusCode> {
    state
        .tokens
        .resolve(&token)
        .await
        .ok_or(AuthError::Unauthorized)?;

    state.tokens.revoke(&token).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
///
/// Returns current token cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.expirations,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
