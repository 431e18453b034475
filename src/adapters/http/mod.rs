//! HTTP adapters - REST API over axum.
//!
//! - `contacts` - `/api/contacts`
//! - `profile` - `/api/profile`
//! - `middleware` - bearer auth and request correlation
//! - `error` - `DomainError` to HTTP status and body
//! - `router` - state, routes and tower layers

pub mod contacts;
pub mod error;
pub mod middleware;
pub mod profile;
pub mod router;

pub use error::{ApiError, ErrorResponse};
pub use router::{build_router, AppState};
