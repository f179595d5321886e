//! Credential Module
//!
//! Stored credential records and password digest helpers.

use sha1::{Digest, Sha1};

// == User Credential ==
/// A stored user credential.
///
/// Read-only from the endpoints' point of view: lookups by identity only.
#[derive(Debug, Clone)]
pub struct UserCredential {
    /// Unique user id
    pub id: String,
    /// Login identity
    pub email: String,
    /// Hex digest of the password
    pub password_hash: String,
}

// == Password Digests ==
/// Hashes a plaintext password into its stored digest form.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checks a plaintext password against a stored digest.
///
/// The supplied password is hashed with the same scheme and the comparison
/// happens between equal-length digests, never against the plaintext.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password).as_bytes() == stored_hash.as_bytes()
}
