//! DeleteContact - Command handler for removing a user from the contact list.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, DomainError, UserId};
use crate::domain::user::Login;
use crate::ports::{ContactRepository, UserRepository};

/// Command to remove the user identified by `target_login` from contacts.
#[derive(Debug, Clone)]
pub struct DeleteContactCommand {
    pub user_id: UserId,
    pub target_login: String,
}

/// Result of deleting a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteContactResult {
    /// `false` when there was nothing to remove.
    pub deleted: bool,
}

/// Handler for deleting contacts.
///
/// Deleting a relationship that does not exist, including one to an unknown
/// login, succeeds with `deleted: false`.
pub struct DeleteContactHandler {
    contacts: Arc<dyn ContactRepository>,
    users: Arc<dyn UserRepository>,
}

impl DeleteContactHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { contacts, users }
    }

    pub async fn handle(
        &self,
        cmd: DeleteContactCommand,
        metadata: CommandMetadata,
    ) -> Result<DeleteContactResult, DomainError> {
        let login = Login::new(&cmd.target_login)?;

        let deleted = match self.users.find_by_login(&login).await? {
            Some(target) => self.contacts.remove(cmd.user_id, target.id()).await?,
            None => false,
        };

        tracing::info!(
            correlation_id = metadata.correlation_id(),
            owner = %cmd.user_id,
            login = %login,
            deleted,
            "Contact deleted"
        );

        Ok(DeleteContactResult { deleted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryContactRepository, InMemoryUserRepository};
    use crate::domain::contacts::ContactRelationship;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::user::{DisplayName, User};

    fn id(n: i64) -> UserId {
        UserId::new(n).unwrap()
    }

    fn user(n: i64, login: &str) -> User {
        User::new(id(n), Login::new(login).unwrap(), DisplayName::new(login).unwrap())
    }

    async fn setup_with_contact() -> (Arc<InMemoryContactRepository>, DeleteContactHandler) {
        let users = Arc::new(
            InMemoryUserRepository::new()
                .with_user(user(1, "ivanov"))
                .with_user(user(2, "adminVasya"))
                .with_user(user(3, "adminArtem")),
        );
        let contacts = Arc::new(InMemoryContactRepository::new());
        contacts
            .add(&ContactRelationship::new(id(1), id(2)).unwrap())
            .await
            .unwrap();
        let handler = DeleteContactHandler::new(contacts.clone(), users);
        (contacts, handler)
    }

    fn cmd(login: &str) -> DeleteContactCommand {
        DeleteContactCommand {
            user_id: id(1),
            target_login: login.to_string(),
        }
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(id(1))
    }

    #[tokio::test]
    async fn test_delete_existing_contact() {
        let (contacts, handler) = setup_with_contact().await;

        let result = handler.handle(cmd("adminVasya"), metadata()).await.unwrap();

        assert!(result.deleted);
        assert!(contacts.list_for_owner(id(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_non_contact_is_noop() {
        let (contacts, handler) = setup_with_contact().await;

        let result = handler.handle(cmd("adminArtem"), metadata()).await.unwrap();

        assert!(!result.deleted);
        assert_eq!(contacts.list_for_owner(id(1)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_login_is_noop() {
        let (contacts, handler) = setup_with_contact().await;

        let result = handler.handle(cmd("ghost"), metadata()).await.unwrap();

        assert!(!result.deleted);
        assert_eq!(contacts.list_for_owner(id(1)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_blank_login_is_rejected() {
        let (_, handler) = setup_with_contact().await;

        let err = handler.handle(cmd(""), metadata()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
