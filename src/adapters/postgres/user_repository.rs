//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::{
    DateOfBirth, DisplayName, Email, Login, ProfileUpdate, Telephone, User,
};
use crate::ports::UserRepository;

const USER_COLUMNS: &str = "id, login, display_name, tel, email, date_of_birth, updated_at";

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE login = $1"))
            .bind(login.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user by login: {}", e)))?;

        row.map(row_to_user).transpose()
    }

    async fn find_many(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i64> = ids.iter().map(UserId::as_i64).collect();
        // array_position keeps the caller's ordering
        let rows = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1) \
             ORDER BY array_position($1, id)"
        ))
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch users: {}", e)))?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn apply_profile_update(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> Result<bool, DomainError> {
        let now = Timestamp::now();

        // SET expressions see the pre-update row, so absent fields keep the
        // stored value and updated_at only moves when something differs
        let row = sqlx::query(
            r#"
            UPDATE users SET
                tel = COALESCE($2, tel),
                date_of_birth = COALESCE($3, date_of_birth),
                display_name = COALESCE($4, display_name),
                updated_at = CASE
                    WHEN COALESCE($2, tel) IS DISTINCT FROM tel
                      OR COALESCE($3, date_of_birth) IS DISTINCT FROM date_of_birth
                      OR COALESCE($4, display_name) IS DISTINCT FROM display_name
                    THEN $5
                    ELSE updated_at
                END
            WHERE id = $1
            RETURNING updated_at = $5 AS changed
            "#,
        )
        .bind(id.as_i64())
        .bind(update.tel().map(Telephone::as_str))
        .bind(update.date_of_birth().map(DateOfBirth::as_date))
        .bind(update.display_name().map(DisplayName::as_str))
        .bind(now.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update user: {}", e)))?;

        match row {
            Some(row) => get(&row, "changed"),
            None => Err(DomainError::new(
                ErrorCode::NotFound,
                format!("User {} not found", id),
            )),
        }
    }
}

fn row_to_user(row: sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: i64 = get(&row, "id")?;
    let login: String = get(&row, "login")?;
    let display_name: String = get(&row, "display_name")?;
    let tel: Option<String> = get(&row, "tel")?;
    let email: Option<String> = get(&row, "email")?;
    let date_of_birth: Option<chrono::NaiveDate> = get(&row, "date_of_birth")?;
    let updated_at: chrono::DateTime<chrono::Utc> = get(&row, "updated_at")?;

    Ok(User::reconstitute(
        UserId::new(id).map_err(corrupt_row)?,
        Login::new(login).map_err(corrupt_row)?,
        DisplayName::new(display_name).map_err(corrupt_row)?,
        tel.map(Telephone::new).transpose().map_err(corrupt_row)?,
        email.map(Email::new).transpose().map_err(corrupt_row)?,
        date_of_birth.map(DateOfBirth::reconstitute),
        Timestamp::from_datetime(updated_at),
    ))
}

fn get<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", column, e)))
}

fn corrupt_row(e: impl std::fmt::Display) -> DomainError {
    DomainError::database(format!("Invalid user row: {}", e))
}
