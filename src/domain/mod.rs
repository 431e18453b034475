//! Domain layer - users, contact relationships and shared primitives.

pub mod contacts;
pub mod foundation;
pub mod user;
