//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod books;
pub mod chapters;
pub mod comments;
pub mod health;
pub mod reactions;
pub mod users;
