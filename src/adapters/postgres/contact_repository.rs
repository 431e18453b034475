//! PostgreSQL implementation of ContactRepository.
//!
//! The `(owner_id, contact_id)` primary key makes concurrent adds of the
//! same pair collapse into one row.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::contacts::ContactRelationship;
use crate::domain::foundation::{DomainError, Timestamp, UserId, ValidationError};
use crate::ports::ContactRepository;

/// PostgreSQL implementation of ContactRepository.
#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn list_for_owner(
        &self,
        owner_id: UserId,
    ) -> Result<Vec<ContactRelationship>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT owner_id, contact_id, added_at
            FROM contacts
            WHERE owner_id = $1
            ORDER BY added_at ASC, contact_id ASC
            "#,
        )
        .bind(owner_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list contacts: {}", e)))?;

        rows.into_iter().map(row_to_relationship).collect()
    }

    async fn add(&self, relationship: &ContactRelationship) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO contacts (owner_id, contact_id, added_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (owner_id, contact_id) DO NOTHING
            "#,
        )
        .bind(relationship.owner_id().as_i64())
        .bind(relationship.contact_id().as_i64())
        .bind(relationship.added_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert contact: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, owner_id: UserId, contact_id: UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM contacts WHERE owner_id = $1 AND contact_id = $2")
            .bind(owner_id.as_i64())
            .bind(contact_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete contact: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_relationship(row: sqlx::postgres::PgRow) -> Result<ContactRelationship, DomainError> {
    let owner_id: i64 = row
        .try_get("owner_id")
        .map_err(|e| DomainError::database(format!("Failed to get owner_id: {}", e)))?;
    let contact_id: i64 = row
        .try_get("contact_id")
        .map_err(|e| DomainError::database(format!("Failed to get contact_id: {}", e)))?;
    let added_at: chrono::DateTime<chrono::Utc> = row
        .try_get("added_at")
        .map_err(|e| DomainError::database(format!("Failed to get added_at: {}", e)))?;

    let invalid = |e: ValidationError| DomainError::database(format!("Invalid contact row: {}", e));
    Ok(ContactRelationship::reconstitute(
        UserId::new(owner_id).map_err(invalid)?,
        UserId::new(contact_id).map_err(invalid)?,
        Timestamp::from_datetime(added_at),
    ))
}
