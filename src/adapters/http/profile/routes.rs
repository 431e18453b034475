//! Axum routes for the profile endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::router::AppState;

use super::handlers::{get_own_profile, update_profile};

/// Profile routes, mounted under `/api`.
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_own_profile).put(update_profile))
}
