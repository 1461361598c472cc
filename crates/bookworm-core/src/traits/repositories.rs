//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; `bookworm-db` provides a
//! PostgreSQL implementation and an in-memory one for tests.

use async_trait::async_trait;

use crate::entities::{Book, Chapter, Comment, CommentWithAuthor, Reaction, Reactor, User};
use crate::error::DomainError;
use crate::value_objects::{CommentVote, Snowflake, Target};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Book Repository
// ============================================================================

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find book by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Book>>;

    /// List books in ascending ID order, optionally filtered by a
    /// case-insensitive title substring
    async fn list(&self, title_contains: Option<&str>) -> RepoResult<Vec<Book>>;

    /// List books written by a user in ascending ID order
    async fn find_by_author(&self, author_id: Snowflake) -> RepoResult<Vec<Book>>;

    /// Create a new book
    async fn create(&self, book: &Book) -> RepoResult<()>;
}

// ============================================================================
// Chapter Repository
// ============================================================================

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    /// Find chapter by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Chapter>>;

    /// All chapters of a book in ascending ID order
    async fn find_by_book(&self, book_id: Snowflake) -> RepoResult<Vec<Chapter>>;

    /// Chapter of the same book with the greatest ID below `chapter_id`
    async fn find_previous(
        &self,
        book_id: Snowflake,
        chapter_id: Snowflake,
    ) -> RepoResult<Option<Chapter>>;

    /// Chapter of the same book with the smallest ID above `chapter_id`
    async fn find_next(
        &self,
        book_id: Snowflake,
        chapter_id: Snowflake,
    ) -> RepoResult<Option<Chapter>>;

    /// Create a new chapter
    async fn create(&self, chapter: &Chapter) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Comments on a target with author usernames, ascending by ID
    async fn find_thread(&self, target: Target) -> RepoResult<Vec<CommentWithAuthor>>;

    /// Atomically add one to a tally, returning the updated comment or
    /// `None` if it does not exist
    async fn increment(&self, id: Snowflake, vote: CommentVote) -> RepoResult<Option<Comment>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert the reaction, or replace the kind of the caller's existing
    /// reaction on the same target. Returns the stored row.
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<Reaction>;

    /// Everyone who reacted to a target, in reaction ID order
    async fn find_reactors(&self, target: Target) -> RepoResult<Vec<Reactor>>;
}
