//! In-memory implementation of UserRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{Login, ProfileUpdate, User};
use crate::ports::UserRepository;

/// User store backed by a `HashMap` keyed on user id.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user record.
    pub fn with_user(mut self, user: User) -> Self {
        self.users.get_mut().insert(user.id(), user);
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.login() == login).cloned())
    }

    async fn find_many(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn apply_profile_update(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> Result<bool, DomainError> {
        // Merge under the write lock so the read-modify-write is atomic
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or_else(|| {
            DomainError::new(ErrorCode::NotFound, format!("User {} not found", id))
        })?;
        Ok(user.apply_update(update))
    }
}
