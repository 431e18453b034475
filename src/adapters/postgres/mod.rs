//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - user records and profile updates
//! - `PostgresContactRepository` - contact relationships

mod contact_repository;
mod user_repository;

pub use contact_repository::PostgresContactRepository;
pub use user_repository::PostgresUserRepository;
