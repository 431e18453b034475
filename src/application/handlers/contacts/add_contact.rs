//! AddContact - Command handler for adding a user to the contact list.

use std::sync::Arc;

use crate::domain::contacts::ContactRelationship;
use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode, UserId};
use crate::domain::user::Login;
use crate::ports::{ContactRepository, UserRepository};

/// Command to add the user identified by `target_login` as a contact.
#[derive(Debug, Clone)]
pub struct AddContactCommand {
    pub user_id: UserId,
    pub target_login: String,
}

/// Result of adding a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddContactResult {
    pub contact_id: UserId,
    /// `false` when the relationship already existed.
    pub added: bool,
}

/// Handler for adding contacts.
pub struct AddContactHandler {
    contacts: Arc<dyn ContactRepository>,
    users: Arc<dyn UserRepository>,
}

impl AddContactHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { contacts, users }
    }

    pub async fn handle(
        &self,
        cmd: AddContactCommand,
        metadata: CommandMetadata,
    ) -> Result<AddContactResult, DomainError> {
        // 1. Validate the login handle
        let login = Login::new(&cmd.target_login)?;

        // 2. The acting user must have a record of its own
        if self.users.find_by_id(cmd.user_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::NotFound,
                format!("Profile not found for user {}", cmd.user_id),
            ));
        }

        // 3. Resolve the target user
        let target = self
            .users
            .find_by_login(&login)
            .await?
            .ok_or_else(|| DomainError::user_not_found(login.as_str()))?;

        // 4. Build the relationship (rejects self-contacts)
        let relationship = ContactRelationship::new(cmd.user_id, target.id())?;

        // 5. Persist idempotently
        let added = self.contacts.add(&relationship).await?;

        tracing::info!(
            correlation_id = metadata.correlation_id(),
            owner = %cmd.user_id,
            contact = %target.id(),
            added,
            "Contact added"
        );

        Ok(AddContactResult {
            contact_id: target.id(),
            added,
        })
    }
}
