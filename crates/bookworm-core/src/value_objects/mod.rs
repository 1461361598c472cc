//! Value objects - immutable types that represent domain concepts

mod actor;
mod snowflake;
mod target;

pub use actor::Actor;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use target::{CommentVote, ReactionKind, Target, TargetKind, UnknownVariant};
