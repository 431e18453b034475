//! Router assembly: application state, routes and tower layers.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::{
    AddContactHandler, DeleteContactHandler, GetOwnProfileHandler, ListContactsHandler,
    UpdateProfileHandler,
};
use crate::config::ServerConfig;
use crate::ports::{ContactRepository, UserRepository};

use super::contacts::contacts_routes;
use super::middleware::{auth_middleware, AuthState, REQUEST_ID_HEADER};
use super::profile::profile_routes;

/// Shared application state.
///
/// Cloned per request; handlers are built on demand from the ports.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub contacts: Arc<dyn ContactRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, contacts: Arc<dyn ContactRepository>) -> Self {
        Self { users, contacts }
    }

    pub fn list_contacts_handler(&self) -> ListContactsHandler {
        ListContactsHandler::new(self.contacts.clone(), self.users.clone())
    }

    pub fn add_contact_handler(&self) -> AddContactHandler {
        AddContactHandler::new(self.contacts.clone(), self.users.clone())
    }

    pub fn delete_contact_handler(&self) -> DeleteContactHandler {
        DeleteContactHandler::new(self.contacts.clone(), self.users.clone())
    }

    pub fn get_own_profile_handler(&self) -> GetOwnProfileHandler {
        GetOwnProfileHandler::new(self.users.clone())
    }

    pub fn update_profile_handler(&self) -> UpdateProfileHandler {
        UpdateProfileHandler::new(self.users.clone())
    }
}

/// Build the complete service router.
///
/// # Routes
///
/// - `GET|POST|DELETE /api/contacts`
/// - `GET|PUT /api/profile`
/// - `GET /health` (no auth)
///
/// Layers, outermost first: request id, trace, timeout, CORS. The auth
/// middleware wraps only the `/api` routes.
pub fn build_router(state: AppState, validator: AuthState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(contacts_routes())
        .merge(profile_routes())
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    REQUEST_ID_HEADER.clone(),
                    MakeRequestUuid,
                ))
                .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER.clone()))
                .layer(
                    TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                        let request_id = req
                            .headers()
                            .get(&REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("-");
                        tracing::info_span!(
                            "http_request",
                            method = %req.method(),
                            path = %req.uri().path(),
                            request_id = %request_id,
                        )
                    }),
                )
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(cors_layer(server)),
        )
}

/// GET /health - Liveness probe
async fn health() -> &'static str {
    "ok"
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let origins: Vec<header::HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        if server.is_production() {
            tracing::warn!("No CORS origins configured; allowing any origin");
        }
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
