//! Chapter handlers

use axum::{
    extract::{Path, State},
    Json,
};
use bookworm_service::dto::ChapterViewResponse;
use bookworm_service::ContentService;

use crate::extractors::parse_id;
use crate::response::ApiResult;
use crate::state::AppState;

/// Read-chapter view
///
/// GET /chapter/{chapter_id}
pub async fn read_chapter(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
) -> ApiResult<Json<ChapterViewResponse>> {
    let chapter_id = parse_id(&chapter_id, "chapter_id")?;
    let service = ContentService::new(state.service_context());
    Ok(Json(service.read_chapter(chapter_id).await?))
}
