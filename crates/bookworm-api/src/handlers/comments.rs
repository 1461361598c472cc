//! Comment handlers
//!
//! Posting needs an authenticated caller. Like/dislike on a comment is an
//! open counter and takes no credentials.

use axum::{
    extract::{Path, State},
    Json,
};
use bookworm_core::CommentVote;
use bookworm_service::dto::{CommentResponse, CommentTallyResponse, CreateCommentRequest};
use bookworm_service::CommentService;

use crate::extractors::{parse_id, parse_target, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Post a comment on a book or chapter
///
/// POST /comment/{target_kind}/{target_id}
pub async fn post_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((kind, target_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let target = parse_target(&kind, &target_id)?;
    let service = CommentService::new(state.service_context());
    let comment = service.post_comment(auth.actor(), target, request).await?;
    Ok(Created(Json(comment)))
}

/// POST /comment/{comment_id}/like
pub async fn like_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> ApiResult<Json<CommentTallyResponse>> {
    vote(&state, &comment_id, CommentVote::Like).await
}

/// POST /comment/{comment_id}/dislike
pub async fn dislike_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> ApiResult<Json<CommentTallyResponse>> {
    vote(&state, &comment_id, CommentVote::Dislike).await
}

async fn vote(
    state: &AppState,
    comment_id: &str,
    vote: CommentVote,
) -> ApiResult<Json<CommentTallyResponse>> {
    let comment_id = parse_id(comment_id, "comment_id")?;
    let service = CommentService::new(state.service_context());
    Ok(Json(service.increment(comment_id, vote).await?))
}
