//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in bookworm-core.

mod book;
mod chapter;
mod comment;
mod error;
mod reaction;
mod user;

pub use book::PgBookRepository;
pub use chapter::PgChapterRepository;
pub use comment::PgCommentRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
