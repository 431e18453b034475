//! Authentication adapters implementing the `SessionValidator` port.
//!
//! - `jwt` - HS256 tokens from the identity service
//! - `mock` - fixed token table for tests and local development

mod jwt;
mod mock;

pub use jwt::{AccessClaims, JwtSessionValidator};
pub use mock::MockSessionValidator;
