//! ContactRepository port - persistence of contact relationships.

use async_trait::async_trait;

use crate::domain::contacts::ContactRelationship;
use crate::domain::foundation::{DomainError, UserId};

/// Repository for directed contact relationships.
///
/// # Contract
///
/// - `add` is idempotent: adding an existing pair keeps the original
///   relationship and returns `false`
/// - `remove` of a missing pair is a no-op returning `false`
/// - `list_for_owner` returns relationships oldest first
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All relationships owned by `owner_id`, ordered by `added_at`.
    async fn list_for_owner(
        &self,
        owner_id: UserId,
    ) -> Result<Vec<ContactRelationship>, DomainError>;

    /// Store the relationship. Returns `true` if it was newly created.
    async fn add(&self, relationship: &ContactRelationship) -> Result<bool, DomainError>;

    /// Remove the relationship. Returns `true` if one existed.
    async fn remove(&self, owner_id: UserId, contact_id: UserId) -> Result<bool, DomainError>;
}
