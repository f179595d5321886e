//! Auth Gate - a minimal authentication gateway
//!
//! Issues and validates opaque session tokens for registered users,
//! backed by an expiring in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod token;
pub mod users;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
