//! GetOwnProfile - Query handler for the acting user's profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Query for the acting user's own profile.
#[derive(Debug, Clone)]
pub struct GetOwnProfileQuery {
    pub user_id: UserId,
}

/// Handler for reading the own profile.
pub struct GetOwnProfileHandler {
    users: Arc<dyn UserRepository>,
}

impl GetOwnProfileHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetOwnProfileQuery) -> Result<User, DomainError> {
        let user = self.users.find_by_id(query.user_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::NotFound,
                format!("Profile not found for user {}", query.user_id),
            )
        })?;

        tracing::debug!(user = %query.user_id, "Loaded own profile");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::user::{DisplayName, Login};

    #[tokio::test]
    async fn test_get_own_profile_exists() {
        let user = User::new(
            UserId::new(1).unwrap(),
            Login::new("ivanov").unwrap(),
            DisplayName::new("Ivan").unwrap(),
        );
        let users = Arc::new(InMemoryUserRepository::new().with_user(user.clone()));
        let handler = GetOwnProfileHandler::new(users);

        let result = handler
            .handle(GetOwnProfileQuery {
                user_id: UserId::new(1).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(result, user);
    }

    #[tokio::test]
    async fn test_get_own_profile_not_found() {
        let handler = GetOwnProfileHandler::new(Arc::new(InMemoryUserRepository::new()));

        let err = handler
            .handle(GetOwnProfileQuery {
                user_id: UserId::new(1).unwrap(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
