//! Contacts module - directed contact relationships between users.
//!
//! # Domain Invariants
//!
//! 1. A relationship references an existing target user
//! 2. At most one relationship exists per (owner, contact) pair
//! 3. A user cannot be their own contact

mod contact;

pub use contact::{ContactInfo, ContactRelationship};
