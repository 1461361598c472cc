//! Book handlers
//!
//! Listing, creation, the book page, the book-data export, and chapter
//! creation under a book.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use bookworm_service::dto::{
    BookDataResponse, BookResponse, BookSearchQuery, BookSummaryResponse, ChapterResponse,
    CreateBookRequest, CreateChapterRequest,
};
use bookworm_service::{BookService, ChapterService, ContentService};

use crate::extractors::{parse_id, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List books, optionally filtered by title
///
/// GET /books?q=
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookSearchQuery>,
) -> ApiResult<Json<Vec<BookSummaryResponse>>> {
    let service = BookService::new(state.service_context());
    let books = service.list_books(query.term()).await?;
    Ok(Json(books))
}

/// Create a book
///
/// POST /books
pub async fn create_book(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBookRequest>,
) -> ApiResult<Created<Json<BookSummaryResponse>>> {
    let service = BookService::new(state.service_context());
    let book = service.create_book(auth.actor(), request).await?;
    Ok(Created(Json(book)))
}

/// Book page
///
/// GET /book/{book_id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> ApiResult<Json<BookResponse>> {
    let book_id = parse_id(&book_id, "book_id")?;
    let service = BookService::new(state.service_context());
    Ok(Json(service.get_book(book_id).await?))
}

/// Book-data export
///
/// GET /book/{book_id}/data
pub async fn get_book_data(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> ApiResult<Json<BookDataResponse>> {
    let book_id = parse_id(&book_id, "book_id")?;
    let service = ContentService::new(state.service_context());
    Ok(Json(service.book_data(book_id).await?))
}

/// Append a chapter (book author only)
///
/// POST /book/{book_id}/chapters
pub async fn create_chapter(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(book_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateChapterRequest>,
) -> ApiResult<Created<Json<ChapterResponse>>> {
    let book_id = parse_id(&book_id, "book_id")?;
    let service = ChapterService::new(state.service_context());
    let chapter = service
        .create_chapter(auth.actor(), book_id, request)
        .await?;
    Ok(Created(Json(chapter)))
}
