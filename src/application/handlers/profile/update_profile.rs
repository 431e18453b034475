//! UpdateProfile - Command handler for partial profile updates.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode, UserId};
use crate::domain::user::{Login, ProfileUpdate};
use crate::ports::UserRepository;

/// Command to merge profile fields onto the acting user's record.
///
/// `login` identifies the owner and must match the acting user; it is
/// never changed.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub login: String,
    pub tel: Option<String>,
    pub date_of_birth: Option<String>,
    pub display_name: Option<String>,
}

/// The fields that were accepted, echoed as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfileResult {
    pub tel: Option<String>,
    pub date_of_birth: Option<String>,
    pub display_name: Option<String>,
    /// Whether the stored record actually changed.
    pub changed: bool,
}

/// Handler for updating profiles.
pub struct UpdateProfileHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdateProfileHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        cmd: UpdateProfileCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateProfileResult, DomainError> {
        // 1. Validate every field before touching the store
        let login = Login::new(&cmd.login)?;
        let update = ProfileUpdate::parse(
            cmd.tel.as_deref(),
            cmd.date_of_birth.as_deref(),
            cmd.display_name.as_deref(),
        )?;

        // 2. Load the acting user
        let user = self.users.find_by_id(cmd.user_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::NotFound,
                format!("Profile not found for user {}", cmd.user_id),
            )
        })?;

        // 3. The login in the body must be the acting user's own
        if user.login() != &login {
            tracing::warn!(
                correlation_id = metadata.correlation_id(),
                user = %cmd.user_id,
                requested = %login,
                "Profile update for another login rejected"
            );
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Cannot update another user's profile",
            ));
        }

        // 4. Merge inside the store; login never changes so the check above
        // cannot go stale
        let changed = if update.is_empty() {
            false
        } else {
            self.users.apply_profile_update(cmd.user_id, &update).await?
        };

        tracing::info!(
            correlation_id = metadata.correlation_id(),
            user = %cmd.user_id,
            changed,
            "Profile updated"
        );

        Ok(UpdateProfileResult {
            tel: cmd.tel,
            date_of_birth: cmd.date_of_birth,
            display_name: cmd.display_name,
            changed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::user::{DateOfBirth, DisplayName, User};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::Barrier;

    fn id(n: i64) -> UserId {
        UserId::new(n).unwrap()
    }

    fn ivanov() -> User {
        User::new(
            id(1),
            Login::new("ivanov").unwrap(),
            DisplayName::new("Ivan").unwrap(),
        )
        .with_date_of_birth(DateOfBirth::parse("02.05.2003").unwrap())
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(id(1)).with_correlation_id("test-correlation-id")
    }

    fn base_cmd(login: &str) -> UpdateProfileCommand {
        UpdateProfileCommand {
            user_id: id(1),
            login: login.to_string(),
            tel: None,
            date_of_birth: None,
            display_name: None,
        }
    }

    /// Counts writes so tests can assert nothing was persisted.
    struct CountingUserRepository {
        inner: InMemoryUserRepository,
        writes: Mutex<usize>,
    }

    #[async_trait]
    impl UserRepository for CountingUserRepository {
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
            self.inner.find_by_id(id).await
        }

        async fn find_by_login(&self, login: &Login) -> Result<Option<User>, DomainError> {
            self.inner.find_by_login(login).await
        }

        async fn find_many(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
            self.inner.find_many(ids).await
        }

        async fn apply_profile_update(
            &self,
            id: UserId,
            update: &ProfileUpdate,
        ) -> Result<bool, DomainError> {
            *self.writes.lock().unwrap() += 1;
            self.inner.apply_profile_update(id, update).await
        }
    }

    /// Holds each lookup at the barrier so concurrent updates all load the
    /// record before any of them writes.
    struct LockstepUserRepository {
        inner: InMemoryUserRepository,
        loaded: Barrier,
    }

    #[async_trait]
    impl UserRepository for LockstepUserRepository {
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
            let user = self.inner.find_by_id(id).await;
            self.loaded.wait().await;
            user
        }

        async fn find_by_login(&self, login: &Login) -> Result<Option<User>, DomainError> {
            self.inner.find_by_login(login).await
        }

        async fn find_many(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
            self.inner.find_many(ids).await
        }

        async fn apply_profile_update(
            &self,
            id: UserId,
            update: &ProfileUpdate,
        ) -> Result<bool, DomainError> {
            self.inner.apply_profile_update(id, update).await
        }
    }

    fn counting_repo() -> Arc<CountingUserRepository> {
        Arc::new(CountingUserRepository {
            inner: InMemoryUserRepository::new().with_user(ivanov()),
            writes: Mutex::new(0),
        })
    }

    #[tokio::test]
    async fn test_update_tel_only_leaves_other_fields() {
        let repo = counting_repo();
        let handler = UpdateProfileHandler::new(repo.clone());

        let result = handler
            .handle(
                UpdateProfileCommand {
                    tel: Some("+79991234567".to_string()),
                    ..base_cmd("ivanov")
                },
                metadata(),
            )
            .await
            .unwrap();

        assert!(result.changed);
        assert_eq!(result.tel.as_deref(), Some("+79991234567"));
        assert!(result.date_of_birth.is_none());

        let stored = repo.find_by_id(id(1)).await.unwrap().unwrap();
        assert_eq!(stored.tel().unwrap().as_str(), "+79991234567");
        assert_eq!(stored.display_name().as_str(), "Ivan");
        assert_eq!(
            stored.date_of_birth().unwrap().to_utc_midnight_string(),
            "2003-05-02T00:00:00.000Z"
        );
    }

    #[tokio::test]
    async fn test_update_echoes_submitted_values() {
        let repo = counting_repo();
        let handler = UpdateProfileHandler::new(repo);

        let result = handler
            .handle(
                UpdateProfileCommand {
                    user_id: id(1),
                    login: "ivanov".to_string(),
                    tel: Some("+79991234567".to_string()),
                    date_of_birth: Some("01.01.2003".to_string()),
                    display_name: None,
                },
                metadata(),
            )
            .await
            .unwrap();

        assert_eq!(result.tel.as_deref(), Some("+79991234567"));
        assert_eq!(result.date_of_birth.as_deref(), Some("01.01.2003"));
        assert!(result.display_name.is_none());
    }

    #[tokio::test]
    async fn test_update_malformed_tel_writes_nothing() {
        let repo = counting_repo();
        let handler = UpdateProfileHandler::new(repo.clone());

        let err = handler
            .handle(
                UpdateProfileCommand {
                    tel: Some("call me".to_string()),
                    display_name: Some("New Name".to_string()),
                    ..base_cmd("ivanov")
                },
                metadata(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(*repo.writes.lock().unwrap(), 0);
        let stored = repo.find_by_id(id(1)).await.unwrap().unwrap();
        assert_eq!(stored.display_name().as_str(), "Ivan");
    }

    #[tokio::test]
    async fn test_update_malformed_date_of_birth() {
        let handler = UpdateProfileHandler::new(counting_repo());

        let err = handler
            .handle(
                UpdateProfileCommand {
                    date_of_birth: Some("2003/01/01".to_string()),
                    ..base_cmd("ivanov")
                },
                metadata(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field").map(String::as_str), Some("dateOfBirth"));
    }

    #[tokio::test]
    async fn test_update_other_login_is_forbidden() {
        let repo = counting_repo();
        let handler = UpdateProfileHandler::new(repo.clone());

        let err = handler
            .handle(
                UpdateProfileCommand {
                    tel: Some("+79991234567".to_string()),
                    ..base_cmd("petrov")
                },
                metadata(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert_eq!(*repo.writes.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_without_fields_is_noop() {
        let repo = counting_repo();
        let handler = UpdateProfileHandler::new(repo.clone());

        let result = handler.handle(base_cmd("ivanov"), metadata()).await.unwrap();

        assert!(!result.changed);
        assert_eq!(*repo.writes.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_user() {
        let handler = UpdateProfileHandler::new(Arc::new(InMemoryUserRepository::new()));

        let err = handler.handle(base_cmd("ivanov"), metadata()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_overlapping_updates_keep_both_fields() {
        let repo = Arc::new(LockstepUserRepository {
            inner: InMemoryUserRepository::new().with_user(ivanov()),
            loaded: Barrier::new(2),
        });
        let handler = UpdateProfileHandler::new(repo.clone());

        let tel = UpdateProfileCommand {
            tel: Some("+79991234567".to_string()),
            ..base_cmd("ivanov")
        };
        let name = UpdateProfileCommand {
            display_name: Some("Ivan Ivanov".to_string()),
            ..base_cmd("ivanov")
        };

        let (first, second) = tokio::join!(
            handler.handle(tel, metadata()),
            handler.handle(name, metadata())
        );
        assert!(first.unwrap().changed);
        assert!(second.unwrap().changed);

        let stored = repo.inner.find_by_id(id(1)).await.unwrap().unwrap();
        assert_eq!(stored.tel().unwrap().as_str(), "+79991234567");
        assert_eq!(stored.display_name().as_str(), "Ivan Ivanov");
    }
}
