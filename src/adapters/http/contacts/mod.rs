//! HTTP adapter for the contacts endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddContactResponse, ContactRequest, ContactResponse, ContactsListResponse,
    DeleteContactResponse,
};
pub use routes::contacts_routes;
