//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is what the `SessionValidator` port produces from a
//! bearer token. It carries the acting user's id and login; nothing else is
//! needed by the contacts and profile handlers.

use super::UserId;
use thiserror::Error;

/// The acting user, established by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Numeric user id from the token subject.
    pub id: UserId,

    /// Login handle from the token claims.
    pub login: String,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, login: impl Into<String>) -> Self {
        Self {
            id,
            login: login.into(),
        }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The token validator could not reach its backing service.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if the client should obtain a new token.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
