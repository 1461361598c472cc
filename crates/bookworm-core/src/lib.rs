//! # bookworm-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Book, Chapter, Comment, CommentWithAuthor, Reaction, ReactionCounts, Reactor, User,
};
pub use error::DomainError;
pub use traits::{
    BookRepository, ChapterRepository, CommentRepository, ReactionRepository, RepoResult,
    UserRepository,
};
pub use value_objects::{
    Actor, CommentVote, ReactionKind, Snowflake, SnowflakeGenerator, SnowflakeParseError, Target,
    TargetKind, UnknownVariant,
};
