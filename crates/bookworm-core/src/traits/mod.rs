//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BookRepository, ChapterRepository, CommentRepository, ReactionRepository, RepoResult,
    UserRepository,
};
