//! In-memory implementation of ContactRepository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::contacts::ContactRelationship;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ContactRepository;

/// Contact store keeping relationships in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    relationships: RwLock<Vec<ContactRelationship>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list_for_owner(
        &self,
        owner_id: UserId,
    ) -> Result<Vec<ContactRelationship>, DomainError> {
        let relationships = self.relationships.read().await;
        Ok(relationships
            .iter()
            .filter(|r| r.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn add(&self, relationship: &ContactRelationship) -> Result<bool, DomainError> {
        let mut relationships = self.relationships.write().await;
        let exists = relationships.iter().any(|r| {
            r.owner_id() == relationship.owner_id() && r.contact_id() == relationship.contact_id()
        });
        if exists {
            return Ok(false);
        }
        relationships.push(relationship.clone());
        Ok(true)
    }

    async fn remove(&self, owner_id: UserId, contact_id: UserId) -> Result<bool, DomainError> {
        let mut relationships = self.relationships.write().await;
        let before = relationships.len();
        relationships.retain(|r| !(r.owner_id() == owner_id && r.contact_id() == contact_id));
        Ok(relationships.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> UserId {
        UserId::new(n).unwrap()
    }

    fn rel(owner: i64, contact: i64) -> ContactRelationship {
        ContactRelationship::new(id(owner), id(contact)).unwrap()
    }

    #[tokio::test]
    async fn add_is_idempotent() {
        let repo = InMemoryContactRepository::new();

        assert!(repo.add(&rel(1, 2)).await.unwrap());
        assert!(!repo.add(&rel(1, 2)).await.unwrap());

        assert_eq!(repo.list_for_owner(id(1)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn relationships_are_directed() {
        let repo = InMemoryContactRepository::new();
        repo.add(&rel(1, 2)).await.unwrap();

        assert!(repo.list_for_owner(id(2)).await.unwrap().is_empty());
        assert!(!repo.remove(id(2), id(1)).await.unwrap());
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let repo = InMemoryContactRepository::new();
        repo.add(&rel(1, 3)).await.unwrap();
        repo.add(&rel(1, 2)).await.unwrap();
        repo.add(&rel(4, 2)).await.unwrap();

        let contacts: Vec<_> = repo
            .list_for_owner(id(1))
            .await
            .unwrap()
            .iter()
            .map(|r| r.contact_id())
            .collect();
        assert_eq!(contacts, vec![id(3), id(2)]);
    }

    #[tokio::test]
    async fn remove_reports_whether_anything_was_removed() {
        let repo = InMemoryContactRepository::new();
        repo.add(&rel(1, 2)).await.unwrap();

        assert!(repo.remove(id(1), id(2)).await.unwrap());
        assert!(!repo.remove(id(1), id(2)).await.unwrap());
    }
}
