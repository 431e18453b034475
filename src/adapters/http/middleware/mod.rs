//! HTTP middleware for axum.
//!
//! - `auth` - bearer token middleware and the `RequireAuth` extractor
//! - `correlation` - request id extraction for command metadata

pub mod auth;
pub mod correlation;

pub use auth::{auth_middleware, AuthRejection, AuthState, RequireAuth};
pub use correlation::{Correlation, REQUEST_ID_HEADER};
