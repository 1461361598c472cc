//! Entity to model mappers
//!
//! - `From<Model> for Entity` where every column maps directly
//! - `TryFrom<Model> for Entity` where a text column must parse into an enum
//! - `*Insert` structs: entity data laid out as bind parameters

mod book;
mod chapter;
mod comment;
mod reaction;
mod user;

pub use book::BookInsert;
pub use chapter::ChapterInsert;
pub use comment::CommentInsert;
pub use reaction::ReactionInsert;
pub use user::UserInsert;

use bookworm_core::{DomainError, Snowflake, Target, TargetKind};

/// Rebuild a [`Target`] from its stored columns
pub(crate) fn target_from_columns(kind: &str, id: i64) -> Result<Target, DomainError> {
    let kind: TargetKind = kind
        .parse()
        .map_err(|e| DomainError::DatabaseError(format!("corrupt row: {e}")))?;
    Ok(Target::new(kind, Snowflake::new(id)))
}
