//! Session validation port for bearer token validation.
//!
//! The auth middleware depends only on this trait. The JWT adapter is used
//! in deployments; the mock adapter in tests and local development.
//!
//! # Example Implementation
//!
//! ```ignore
//! pub struct StaticValidator { ... }
//!
//! #[async_trait]
//! impl SessionValidator for StaticValidator {
//!     async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
//!         // 1. Verify signature and expiry
//!         // 2. Map claims to AuthenticatedUser
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for malformed or badly signed tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
