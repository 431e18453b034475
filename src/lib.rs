//! Contacts API - contact lists and user profiles over REST.
//!
//! Authenticated users keep a directed list of contacts (other users they
//! added by login) and maintain their own profile: telephone, date of
//! birth and display name.
//!
//! Layout follows a ports-and-adapters split: `domain` holds value objects
//! and aggregates, `application` the command/query handlers, `ports` the
//! repository and token-validation traits, `adapters` the HTTP, in-memory,
//! PostgreSQL and JWT implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
