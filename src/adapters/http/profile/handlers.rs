//! HTTP handlers for the profile endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{Correlation, RequireAuth};
use crate::adapters::http::router::AppState;
use crate::application::{GetOwnProfileQuery, UpdateProfileCommand};

use super::dto::{ProfileResponse, UpdateProfileRequest, UpdateProfileResponse};

/// GET /api/profile - The acting user's profile
pub async fn get_own_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .get_own_profile_handler()
        .handle(GetOwnProfileQuery { user_id: user.id })
        .await?;

    Ok(Json(ProfileResponse::from(&profile)))
}

/// PUT /api/profile - Partially update the acting user's profile
pub async fn update_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    correlation: Correlation,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let cmd = UpdateProfileCommand {
        user_id: user.id,
        login: request.login,
        tel: request.tel,
        date_of_birth: request.date_of_birth,
        display_name: request.display_name,
    };

    let result = state
        .update_profile_handler()
        .handle(cmd, correlation.metadata(user.id))
        .await?;

    Ok(Json(UpdateProfileResponse::from(result)))
}
