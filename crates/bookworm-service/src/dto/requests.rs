//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use bookworm_core::ReactionKind;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Book Requests
// ============================================================================

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Synopsis is required"))]
    pub synopsis: String,

    /// Stored media reference: URL, absolute path under the static root,
    /// or an upload filename
    #[validate(length(max = 200, message = "Cover reference must be at most 200 characters"))]
    pub cover_image: Option<String>,
}

/// `GET /books?q=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookSearchQuery {
    pub q: Option<String>,
}

impl BookSearchQuery {
    /// The search term, with blank queries treated as absent
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

// ============================================================================
// Chapter Requests
// ============================================================================

/// Create chapter request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChapterRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

// ============================================================================
// Comment & Reaction Requests
// ============================================================================

/// Post comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 10000, message = "Comment must be 1-10000 characters"))]
    pub content: String,
}

/// Set reaction request; `kind` is `"like"` or `"dislike"`
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct SetReactionRequest {
    pub kind: ReactionKind,
}
