//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Conversions that need a resolved cover URL take it as an argument.

use bookworm_core::{Book, Chapter, Comment, CommentWithAuthor, Reactor, User};

use super::responses::{
    BookSummaryResponse, ChapterLinkResponse, ChapterResponse, CommentResponse,
    CommentTallyResponse, ReactionSummaryResponse, ReactorResponse, UserResponse,
};
use crate::services::ReactionSummary;

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<&Reactor> for ReactorResponse {
    fn from(reactor: &Reactor) -> Self {
        Self {
            user_id: reactor.user_id.to_string(),
            username: reactor.username.clone(),
        }
    }
}

impl From<&ReactionSummary> for ReactionSummaryResponse {
    fn from(summary: &ReactionSummary) -> Self {
        Self {
            likes: summary.counts.likes,
            dislikes: summary.counts.dislikes,
            like_users: summary.like_users.iter().map(ReactorResponse::from).collect(),
            dislike_users: summary
                .dislike_users
                .iter()
                .map(ReactorResponse::from)
                .collect(),
        }
    }
}

impl From<ReactionSummary> for ReactionSummaryResponse {
    fn from(summary: ReactionSummary) -> Self {
        Self::from(&summary)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&CommentWithAuthor> for CommentResponse {
    fn from(row: &CommentWithAuthor) -> Self {
        let comment = &row.comment;
        Self {
            id: comment.id.to_string(),
            user_id: comment.author_id.to_string(),
            username: row.author_username.clone(),
            content: comment.content.clone(),
            likes: comment.likes,
            dislikes: comment.dislikes,
            created_at: comment.created_at,
        }
    }
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(row: CommentWithAuthor) -> Self {
        Self::from(&row)
    }
}

impl From<&Comment> for CommentTallyResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            likes: comment.likes,
            dislikes: comment.dislikes,
        }
    }
}

// ============================================================================
// Chapter Mappers
// ============================================================================

impl From<&Chapter> for ChapterLinkResponse {
    fn from(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id.to_string(),
            title: chapter.title.clone(),
        }
    }
}

impl From<&Book> for ChapterLinkResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
        }
    }
}

impl From<&Chapter> for ChapterResponse {
    fn from(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id.to_string(),
            book_id: chapter.book_id.to_string(),
            title: chapter.title.clone(),
            content: chapter.content.clone(),
            created_at: chapter.created_at,
        }
    }
}

impl From<Chapter> for ChapterResponse {
    fn from(chapter: Chapter) -> Self {
        Self::from(&chapter)
    }
}

// ============================================================================
// Book Mappers
// ============================================================================

impl BookSummaryResponse {
    pub fn from_book(book: &Book, author_username: String, cover_url: Option<String>) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            synopsis: book.synopsis.clone(),
            cover_url,
            author_id: book.author_id.to_string(),
            author_username,
            created_at: book.created_at,
        }
    }
}
