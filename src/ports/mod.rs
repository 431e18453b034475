//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and the outside world. Adapters implement them.
//!
//! - `UserRepository` - user records and profile persistence
//! - `ContactRepository` - directed contact relationships
//! - `SessionValidator` - bearer token validation

mod contact_repository;
mod session_validator;
mod user_repository;

pub use contact_repository::ContactRepository;
pub use session_validator::SessionValidator;
pub use user_repository::UserRepository;
