//! Credential Store Module
//!
//! The durable identity-to-credential mapping behind a trait seam, so the
//! gateway runs against an in-memory store in tests and a real backend in
//! deployment. Store methods return `Result`: a failing backend surfaces as
//! a server fault, never as a credential rejection.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::users::UserCredential;

// == Credential Store Trait ==
/// Lookup and storage operations the auth endpoints need.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks up a credential by identity.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>>;

    /// Checks whether an identity is already registered.
    async fn exists(&self, email: &str) -> Result<bool>;

    /// Stores a new credential and returns the created record.
    async fn insert(&self, email: &str, password_hash: &str) -> Result<UserCredential>;
}

// == In-Memory Implementation ==
/// Credential store backed by a `HashMap` keyed by identity.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    users: RwLock<HashMap<String, UserCredential>>,
}

impl MemoryCredentialStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn exists(&self, email: &str) -> Result<bool> {
        let users = self.users.read().await;
        Ok(users.contains_key(email))
    }

    async fn insert(&self, email: &str, password_hash: &str) -> Result<UserCredential> {
        let credential = UserCredential {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };

        let mut users = self.users.write().await;
        users.insert(email.to_string(), credential.clone());
        Ok(credential)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::hash_password;

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryCredentialStore::new();

        let created = store
            .insert("u@x.com", &hash_password("p"))
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.email, "u@x.com");

        let found = store.find_by_email("u@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.password_hash, hash_password("p"));
    }

    #[tokio::test]
    async fn test_find_unknown_identity() {
        let store = MemoryCredentialStore::new();

        let found = store.find_by_email("foo@bar.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_exists() {
        let store = MemoryCredentialStore::new();

        assert!(!store.exists("u@x.com").await.unwrap());
        store.insert("u@x.com", &hash_password("p")).await.unwrap();
        assert!(store.exists("u@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = MemoryCredentialStore::new();

        let a = store.insert("a@x.com", &hash_password("p")).await.unwrap();
        let b = store.insert("b@x.com", &hash_password("p")).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
