//! Database models - SQLx-compatible structs for PostgreSQL tables

mod book;
mod chapter;
mod comment;
mod reaction;
mod user;

pub use book::BookModel;
pub use chapter::ChapterModel;
pub use comment::{CommentModel, CommentThreadRow};
pub use reaction::{ReactionModel, ReactorRow};
pub use user::UserModel;
