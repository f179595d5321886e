//! API Module
//!
//! HTTP handlers, extractors, and routing for the gateway REST API.
//!
//! # Endpoints
//! - `POST /users` - Register an identity
//! - `GET /connect` - Exchange basic credentials for a session token
//! - `GET /disconnect` - Revoke a session token
//! - `GET /stats` - Get token cache statistics
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
