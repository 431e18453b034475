//! Contact relationship and the read model returned when listing contacts.

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::user::{DateOfBirth, DisplayName, Email, Login, Telephone, User};

/// One user having added another to their contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRelationship {
    owner_id: UserId,
    contact_id: UserId,
    added_at: Timestamp,
}

impl ContactRelationship {
    /// Creates a relationship from `owner_id` to `contact_id`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the owner and contact are the same user
    pub fn new(owner_id: UserId, contact_id: UserId) -> Result<Self, DomainError> {
        if owner_id == contact_id {
            return Err(DomainError::validation(
                "userLogin",
                "Cannot add yourself as a contact",
            ));
        }
        Ok(Self {
            owner_id,
            contact_id,
            added_at: Timestamp::now(),
        })
    }

    /// Reconstitute from persistence (no validation).
    pub fn reconstitute(owner_id: UserId, contact_id: UserId, added_at: Timestamp) -> Self {
        Self {
            owner_id,
            contact_id,
            added_at,
        }
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn contact_id(&self) -> UserId {
        self.contact_id
    }

    pub fn added_at(&self) -> &Timestamp {
        &self.added_at
    }
}

/// What the acting user sees about one of their contacts.
///
/// Optional fields are `None` when the contact has not filled them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub login: Login,
    pub display_name: DisplayName,
    pub tel: Option<Telephone>,
    pub email: Option<Email>,
    pub date_of_birth: Option<DateOfBirth>,
}

impl From<&User> for ContactInfo {
    fn from(user: &User) -> Self {
        Self {
            login: user.login().clone(),
            display_name: user.display_name().clone(),
            tel: user.tel().cloned(),
            email: user.email().cloned(),
            date_of_birth: user.date_of_birth().copied(),
        }
    }
}
