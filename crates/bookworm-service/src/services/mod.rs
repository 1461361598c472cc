//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request. Mutating operations take an explicit [`bookworm_core::Actor`].

pub mod book;
pub mod chapter;
pub mod comment;
pub mod content;
pub mod context;
pub mod error;
pub mod media;
pub mod reaction;
mod targets;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use book::BookService;
pub use chapter::{ChapterNeighbors, ChapterService};
pub use comment::CommentService;
pub use content::ContentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use media::MediaResolver;
pub use reaction::{ReactionService, ReactionSummary};
pub use user::UserService;
