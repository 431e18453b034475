//! User module - user records and their profile fields.
//!
//! # Domain Invariants
//!
//! 1. A user's login is unique and never changed by this service
//! 2. Profile updates are partial merges and never create a user
//! 3. Telephone, date of birth and display name are validated before they
//!    reach a `User`

pub mod aggregate;
pub mod profile_update;
pub mod values;

pub use aggregate::User;
pub use profile_update::ProfileUpdate;
pub use values::{DateOfBirth, DisplayName, Email, Login, Telephone};
