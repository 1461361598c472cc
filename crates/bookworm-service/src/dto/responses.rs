//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use bookworm_core::ReactionKind;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A user's public page, or the actor's own dashboard
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub books: Vec<BookSummaryResponse>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// A user listed as having reacted
#[derive(Debug, Clone, Serialize)]
pub struct ReactorResponse {
    pub user_id: String,
    pub username: String,
}

/// Tallies and reacting users for one target, taken from a single read
#[derive(Debug, Clone, Serialize)]
pub struct ReactionSummaryResponse {
    pub likes: i64,
    pub dislikes: i64,
    pub like_users: Vec<ReactorResponse>,
    pub dislike_users: Vec<ReactorResponse>,
}

/// Result of `POST /reaction/{kind}/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct ReactionStateResponse {
    pub target_kind: String,
    pub target_id: String,
    /// The caller's current reaction
    pub kind: ReactionKind,
    pub summary: ReactionSummaryResponse,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}

/// Updated tallies after a comment like/dislike
#[derive(Debug, Clone, Serialize)]
pub struct CommentTallyResponse {
    pub id: String,
    pub likes: i64,
    pub dislikes: i64,
}

// ============================================================================
// Chapter Responses
// ============================================================================

/// Chapter reference used in indexes and prev/next links
#[derive(Debug, Clone, Serialize)]
pub struct ChapterLinkResponse {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChapterResponse {
    pub id: String,
    pub book_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Read-chapter view: body, neighbours, reactions and the comment thread
#[derive(Debug, Clone, Serialize)]
pub struct ChapterViewResponse {
    pub chapter: ChapterResponse,
    pub book: ChapterLinkResponse,
    pub previous: Option<ChapterLinkResponse>,
    pub next: Option<ChapterLinkResponse>,
    pub reactions: ReactionSummaryResponse,
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Book Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BookSummaryResponse {
    pub id: String,
    pub title: String,
    pub synopsis: String,
    pub cover_url: Option<String>,
    pub author_id: String,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
}

/// Full book page
#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub synopsis: String,
    pub cover_url: Option<String>,
    pub author: UserResponse,
    pub chapters: Vec<ChapterLinkResponse>,
    pub reactions: ReactionSummaryResponse,
    pub comments: Vec<CommentResponse>,
    pub created_at: DateTime<Utc>,
}

/// Machine-readable book export
///
/// `cover_image` and each chapter's `external_url` are always present and
/// serialize as `null` when there is nothing to link to.
#[derive(Debug, Clone, Serialize)]
pub struct BookDataResponse {
    pub id: String,
    pub title: String,
    pub synopsis: String,
    pub cover_image: Option<String>,
    pub chapters: Vec<BookDataChapter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookDataChapter {
    pub id: String,
    pub title: String,
    pub content: String,
    pub external_url: Option<String>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
