//! User handlers

use axum::{
    extract::{Path, State},
    Json,
};
use bookworm_service::dto::ProfileResponse;
use bookworm_service::UserService;

use crate::extractors::{parse_id, AuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Public profile with the user's books
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let user_id = parse_id(&user_id, "user_id")?;
    let service = UserService::new(state.service_context());
    Ok(Json(service.get_profile(user_id).await?))
}

/// The caller's own books
///
/// GET /users/@me/books
pub async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.dashboard(auth.actor()).await?))
}
