//! Profile application handlers.
//!
//! Read and partially update the acting user's own profile.

mod get_own_profile;
mod update_profile;

pub use get_own_profile::{GetOwnProfileHandler, GetOwnProfileQuery};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler, UpdateProfileResult};
