//! Mock session validator for tests and local development.
//!
//! # Example
//!
//! ```ignore
//! use contacts_api::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new().with_test_user("valid-token", 1, "ivanov");
//! let user = validator.validate("valid-token").await?;
//! assert_eq!(user.login, "ivanov");
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId, ValidationError};
use crate::ports::SessionValidator;

/// Session validator backed by a fixed token table.
///
/// Tokens not in the table return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Returned for every validation when set
    force_error: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `token` as the given user.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.get_mut().insert(token.into(), user);
        self
    }

    /// Accept `token` as user `id` with `login`.
    ///
    /// # Panics
    ///
    /// If `id` is not a valid user id. Intended for test fixtures.
    pub fn with_test_user(self, token: impl Into<String>, id: i64, login: &str) -> Self {
        match Self::test_user(id, login) {
            Ok(user) => self.with_user(token, user),
            Err(e) => panic!("invalid test user {}: {}", id, e),
        }
    }

    /// Fail every validation with `error`.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }

    /// Register a token at runtime.
    pub async fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.tokens.write().await.insert(token.into(), user);
    }

    fn test_user(id: i64, login: &str) -> Result<AuthenticatedUser, ValidationError> {
        Ok(AuthenticatedUser::new(UserId::new(id)?, login))
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }

        self.tokens
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
