//! In-memory adapters for tests and local development.
//!
//! Selected at startup when no database is configured. State lives for the
//! lifetime of the process only.

mod contact_store;
mod user_store;

pub use contact_store::InMemoryContactRepository;
pub use user_store::InMemoryUserRepository;
