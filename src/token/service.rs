//! Token Service Module
//!
//! Mints opaque session tokens, binds them to an identity in the expiring
//! cache, and resolves or revokes them. A token is nothing but a cache
//! entry: key = prefixed token, value = owning identity.

use std::sync::Arc;

use rand::RngCore;
use tokio::sync::RwLock;

use crate::cache::CacheStore;

/// Cache key prefix for session tokens.
const TOKEN_KEY_PREFIX: &str = "auth_";

/// Random bytes per token (256 bits).
const TOKEN_BYTES: usize = 32;

// == Token Service ==
/// Issues and tracks session tokens in the shared cache.
#[derive(Clone)]
pub struct TokenService {
    cache: Arc<RwLock<CacheStore>>,
    session_ttl: Option<u64>,
}

impl TokenService {
    // == Constructor ==
    /// Creates a token service over a shared cache.
    ///
    /// A `session_ttl` of zero means issued tokens never expire on their
    /// own; they live until explicitly revoked.
    pub fn new(cache: Arc<RwLock<CacheStore>>, session_ttl: u64) -> Self {
        Self {
            cache,
            session_ttl: (session_ttl > 0).then_some(session_ttl),
        }
    }

    // == Issue ==
    /// Mints a fresh token for `identity` and stores it in the cache.
    ///
    /// Tokens are 32 bytes from a thread-local CSPRNG, hex encoded.
    /// Collisions over a 256-bit space are negligible, so an issued token
    /// never aliases an active one.
    pub async fn issue(&self, identity: &str) -> String {
        let token = generate_token();
        let mut cache = self.cache.write().await;
        cache.set(token_key(&token), identity.to_string(), self.session_ttl);
        token
    }

    // == Resolve ==
    /// Resolves a token to its owning identity.
    ///
    /// Returns `None` when the token is unknown, revoked, or past its TTL.
    /// Exact match only.
    pub async fn resolve(&self, token: &str) -> Option<String> {
        let mut cache = self.cache.write().await;
        cache.get(&token_key(token))
    }

    // == Revoke ==
    /// Deletes the cache entry for `token`.
    ///
    /// Revoking an unknown or already revoked token is a no-op.
    pub async fn revoke(&self, token: &str) {
        let mut cache = self.cache.write().await;
        cache.delete(&token_key(token));
    }
}

fn token_key(token: &str) -> String {
    format!("{TOKEN_KEY_PREFIX}{token}")
}

/// Generates a hex-encoded 256-bit random token.
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
