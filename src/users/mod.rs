//! Users Module
//!
//! Credential storage for registered identities: the stored credential
//! record, password digest helpers, and the store seam the endpoints
//! depend on.

mod credential;
mod store;

// Re-export public types
pub use credential::{hash_password, verify_password, UserCredential};
pub use store::{CredentialStore, MemoryCredentialStore};
