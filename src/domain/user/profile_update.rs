//! Partial profile update.

use crate::domain::foundation::ValidationError;

use super::values::{DateOfBirth, DisplayName, Telephone};

/// A validated set of profile fields to merge onto a user.
///
/// Only telephone, date of birth and display name are mutable. `None`
/// means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    tel: Option<Telephone>,
    date_of_birth: Option<DateOfBirth>,
    display_name: Option<DisplayName>,
}

impl ProfileUpdate {
    /// Validates raw field values. Fails on the first malformed field.
    pub fn parse(
        tel: Option<&str>,
        date_of_birth: Option<&str>,
        display_name: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            tel: tel.map(Telephone::new).transpose()?,
            date_of_birth: date_of_birth.map(DateOfBirth::parse).transpose()?,
            display_name: display_name.map(DisplayName::new).transpose()?,
        })
    }

    pub fn tel(&self) -> Option<&Telephone> {
        self.tel.as_ref()
    }

    pub fn date_of_birth(&self) -> Option<&DateOfBirth> {
        self.date_of_birth.as_ref()
    }

    pub fn display_name(&self) -> Option<&DisplayName> {
        self.display_name.as_ref()
    }

    /// True when the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.tel.is_none() && self.date_of_birth.is_none() && self.display_name.is_none()
    }
}
