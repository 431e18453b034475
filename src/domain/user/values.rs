//! Value objects for user profile fields.
//!
//! Each type validates on construction, so a `User` can only ever hold
//! well-formed data.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum length of a login handle.
pub const MAX_LOGIN_LENGTH: usize = 64;

/// Maximum length of a display name.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 100;

/// Minimum number of digits in a telephone number.
pub const MIN_TEL_DIGITS: usize = 10;

/// Maximum number of digits in a telephone number (E.164).
pub const MAX_TEL_DIGITS: usize = 15;

// ════════════════════════════════════════════════════════════════════════════
// Login
// ════════════════════════════════════════════════════════════════════════════

/// Unique login handle of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Login(String);

impl Login {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("login"));
        }
        let len = trimmed.chars().count();
        if len > MAX_LOGIN_LENGTH {
            return Err(ValidationError::too_long("login", MAX_LOGIN_LENGTH, len));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(
                "login",
                "must not contain whitespace",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Login {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Login> for String {
    fn from(login: Login) -> Self {
        login.0
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Telephone
// ════════════════════════════════════════════════════════════════════════════

/// Telephone number: optional leading `+` followed by 10-15 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Telephone(String);

impl Telephone {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("tel"));
        }
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "tel",
                "expected an optional '+' followed by digits",
            ));
        }
        if !(MIN_TEL_DIGITS..=MAX_TEL_DIGITS).contains(&digits.len()) {
            return Err(ValidationError::invalid_format(
                "tel",
                format!(
                    "expected {} to {} digits, got {}",
                    MIN_TEL_DIGITS,
                    MAX_TEL_DIGITS,
                    digits.len()
                ),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Telephone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Telephone> for String {
    fn from(tel: Telephone) -> Self {
        tel.0
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DateOfBirth
// ════════════════════════════════════════════════════════════════════════════

/// Date of birth, between 1900-01-01 and today inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    /// Accepted input formats, tried in order.
    const FORMATS: [&'static str; 2] = ["%d.%m.%Y", "%Y-%m-%d"];

    /// Parses `DD.MM.YYYY` or `YYYY-MM-DD`, checked against the current date.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_relative_to(raw, Utc::now().date_naive())
    }

    /// Parses with an explicit "today", for deterministic validation.
    pub fn parse_relative_to(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("dateOfBirth"));
        }
        let date = Self::FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            .ok_or_else(|| {
                ValidationError::invalid_format("dateOfBirth", "expected DD.MM.YYYY or YYYY-MM-DD")
            })?;
        Self::from_date(date, today)
    }

    /// Validates an already-parsed date.
    pub fn from_date(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        let earliest = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN);
        if date < earliest {
            return Err(ValidationError::invalid_format(
                "dateOfBirth",
                "must not be before 1900-01-01",
            ));
        }
        if date > today {
            return Err(ValidationError::invalid_format(
                "dateOfBirth",
                "must not be in the future",
            ));
        }
        Ok(Self(date))
    }

    /// Reconstitute from persistence (no validation).
    pub fn reconstitute(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Midnight UTC with millisecond precision, e.g. `2003-05-02T00:00:00.000Z`.
    pub fn to_utc_midnight_string(&self) -> String {
        format!("{}T00:00:00.000Z", self.0.format("%Y-%m-%d"))
    }
}

impl TryFrom<NaiveDate> for DateOfBirth {
    type Error = ValidationError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_date(date, Utc::now().date_naive())
    }
}

impl From<DateOfBirth> for NaiveDate {
    fn from(dob: DateOfBirth) -> Self {
        dob.0
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DisplayName
// ════════════════════════════════════════════════════════════════════════════

/// Human-readable name shown to contacts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("displayName"));
        }
        let len = trimmed.chars().count();
        if len > MAX_DISPLAY_NAME_LENGTH {
            return Err(ValidationError::too_long(
                "displayName",
                MAX_DISPLAY_NAME_LENGTH,
                len,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.0
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Email
// ════════════════════════════════════════════════════════════════════════════

/// Email address. Only a structural check; deliverability is not our concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        match trimmed.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && domain.contains('.') && !domain.contains('@') =>
            {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ValidationError::invalid_format("email", "expected local@domain")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
