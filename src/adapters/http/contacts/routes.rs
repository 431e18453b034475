//! Axum routes for the contacts endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::router::AppState;

use super::handlers::{add_contact, delete_contact, list_contacts};

/// Contacts routes, mounted under `/api`.
///
/// - `GET /contacts` - list contacts
/// - `POST /contacts` - add a contact by login
/// - `DELETE /contacts` - remove a contact by login
pub fn contacts_routes() -> Router<AppState> {
    Router::new().route(
        "/contacts",
        get(list_contacts).post(add_contact).delete(delete_contact),
    )
}
