//! User aggregate.
//!
//! Users are owned by the user store; this service never creates them. The
//! only mutation it performs is merging a [`ProfileUpdate`] onto an existing
//! record.

use crate::domain::foundation::{Timestamp, UserId};

use super::profile_update::ProfileUpdate;
use super::values::{DateOfBirth, DisplayName, Email, Login, Telephone};

/// A user record.
///
/// # Invariants
///
/// - `login` never changes after construction
/// - every optional field holds validated data or nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    login: Login,
    display_name: DisplayName,
    tel: Option<Telephone>,
    email: Option<Email>,
    date_of_birth: Option<DateOfBirth>,
    updated_at: Timestamp,
}

impl User {
    /// Creates a user with only the required fields set.
    pub fn new(id: UserId, login: Login, display_name: DisplayName) -> Self {
        Self {
            id,
            login,
            display_name,
            tel: None,
            email: None,
            date_of_birth: None,
            updated_at: Timestamp::now(),
        }
    }

    /// Reconstitute a user from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        login: Login,
        display_name: DisplayName,
        tel: Option<Telephone>,
        email: Option<Email>,
        date_of_birth: Option<DateOfBirth>,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            login,
            display_name,
            tel,
            email,
            date_of_birth,
            updated_at,
        }
    }

    pub fn with_tel(mut self, tel: Telephone) -> Self {
        self.tel = Some(tel);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: DateOfBirth) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn tel(&self) -> Option<&Telephone> {
        self.tel.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn date_of_birth(&self) -> Option<&DateOfBirth> {
        self.date_of_birth.as_ref()
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Merges the provided fields onto this record.
    ///
    /// Fields absent from the update are left untouched. Returns `true` if
    /// anything actually changed.
    pub fn apply_update(&mut self, update: &ProfileUpdate) -> bool {
        let mut changed = false;

        if let Some(tel) = update.tel() {
            if self.tel.as_ref() != Some(tel) {
                self.tel = Some(tel.clone());
                changed = true;
            }
        }
        if let Some(dob) = update.date_of_birth() {
            if self.date_of_birth.as_ref() != Some(dob) {
                self.date_of_birth = Some(*dob);
                changed = true;
            }
        }
        if let Some(name) = update.display_name() {
            if &self.display_name != name {
                self.display_name = name.clone();
                changed = true;
            }
        }

        if changed {
            self.updated_at = Timestamp::now();
        }
        changed
    }
}
