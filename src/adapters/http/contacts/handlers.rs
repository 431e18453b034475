//! HTTP handlers for the contacts endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{Correlation, RequireAuth};
use crate::adapters::http::router::AppState;
use crate::application::{AddContactCommand, DeleteContactCommand, ListContactsQuery};

use super::dto::{
    AddContactResponse, ContactRequest, ContactResponse, ContactsListResponse,
    DeleteContactResponse,
};

/// GET /api/contacts - List the acting user's contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let contacts = state
        .list_contacts_handler()
        .handle(ListContactsQuery { user_id: user.id })
        .await?;

    Ok(Json(ContactsListResponse {
        contacts: contacts.into_iter().map(ContactResponse::from).collect(),
    }))
}

/// POST /api/contacts - Add a user to the contact list
pub async fn add_contact(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    correlation: Correlation,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let cmd = AddContactCommand {
        user_id: user.id,
        target_login: request.user_login,
    };

    let result = state
        .add_contact_handler()
        .handle(cmd, correlation.metadata(user.id))
        .await?;

    Ok(Json(AddContactResponse {
        added: result.added,
    }))
}

/// DELETE /api/contacts - Remove a user from the contact list
pub async fn delete_contact(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    correlation: Correlation,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let cmd = DeleteContactCommand {
        user_id: user.id,
        target_login: request.user_login,
    };

    let result = state
        .delete_contact_handler()
        .handle(cmd, correlation.metadata(user.id))
        .await?;

    Ok(Json(DeleteContactResponse {
        deleted: result.deleted,
    }))
}
