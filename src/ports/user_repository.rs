//! UserRepository port - access to the user store.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{Login, ProfileUpdate, User};

/// Repository for user records.
///
/// Users are created elsewhere; this service only reads them and merges
/// profile updates onto them. Updates are applied field by field inside the
/// store so concurrent partial updates never overwrite each other.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by numeric ID.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by login handle.
    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, DomainError>;

    /// Find several users at once. Unknown ids are skipped; order follows `ids`.
    async fn find_many(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError>;

    /// Merge `update` onto the stored record in a single atomic step.
    ///
    /// Fields absent from `update` keep whatever value the store holds at
    /// write time. Returns `true` if the record changed.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record exists for `id`
    async fn apply_profile_update(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> Result<bool, DomainError>;
}
