//! HTTP adapter for the profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ProfileResponse, UpdateProfileRequest, UpdateProfileResponse};
pub use routes::profile_routes;
