//! Domain entities - core business objects

mod book;
mod chapter;
mod comment;
mod reaction;
mod user;

pub use book::Book;
pub use chapter::Chapter;
pub use comment::{Comment, CommentWithAuthor};
pub use reaction::{Reaction, ReactionCounts, Reactor};
pub use user::User;
