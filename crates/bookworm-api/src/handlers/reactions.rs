//! Reaction handlers

use axum::{
    extract::{Path, State},
    Json,
};
use bookworm_service::dto::{ReactionStateResponse, SetReactionRequest};
use bookworm_service::ReactionService;

use crate::extractors::{parse_target, AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Set the caller's like/dislike on a book or chapter
///
/// POST /reaction/{target_kind}/{target_id}
pub async fn set_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((kind, target_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<SetReactionRequest>,
) -> ApiResult<Json<ReactionStateResponse>> {
    let target = parse_target(&kind, &target_id)?;
    let service = ReactionService::new(state.service_context());
    let reaction = service.react(auth.actor(), target, request.kind).await?;
    Ok(Json(reaction))
}
