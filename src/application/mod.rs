//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (add/delete contact, update profile) are separated from
//! query handlers (list contacts, get profile).

pub mod handlers;

pub use handlers::contacts::{
    AddContactCommand, AddContactHandler, AddContactResult, DeleteContactCommand,
    DeleteContactHandler, DeleteContactResult, ListContactsHandler, ListContactsQuery,
};
pub use handlers::profile::{
    GetOwnProfileHandler, GetOwnProfileQuery, UpdateProfileCommand, UpdateProfileHandler,
    UpdateProfileResult,
};
