//! ListContacts - Query handler for the acting user's contact list.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::contacts::ContactInfo;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{ContactRepository, UserRepository};

/// Query for all contacts of a user.
#[derive(Debug, Clone)]
pub struct ListContactsQuery {
    pub user_id: UserId,
}

/// Handler for listing contacts.
pub struct ListContactsHandler {
    contacts: Arc<dyn ContactRepository>,
    users: Arc<dyn UserRepository>,
}

impl ListContactsHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { contacts, users }
    }

    /// Returns contacts in the order they were added. Never fails for an
    /// empty list.
    pub async fn handle(&self, query: ListContactsQuery) -> Result<Vec<ContactInfo>, DomainError> {
        let relationships = self.contacts.list_for_owner(query.user_id).await?;
        if relationships.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<UserId> = relationships.iter().map(|r| r.contact_id()).collect();
        let users: HashMap<UserId, _> = self
            .users
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|u| (u.id(), u))
            .collect();

        let contacts = ids
            .iter()
            .filter_map(|id| match users.get(id) {
                Some(user) => Some(ContactInfo::from(user)),
                None => {
                    tracing::warn!(
                        owner = %query.user_id,
                        contact = %id,
                        "Contact references missing user"
                    );
                    None
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(owner = %query.user_id, count = contacts.len(), "Listed contacts");
        Ok(contacts)
    }
}
