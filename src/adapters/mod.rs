//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - bearer token validation (JWT, mock)
//! - `http` - axum REST API
//! - `memory` - in-memory repositories
//! - `postgres` - PostgreSQL repositories

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use memory::{InMemoryContactRepository, InMemoryUserRepository};
pub use postgres::{PostgresContactRepository, PostgresUserRepository};
