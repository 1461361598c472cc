//! Reaction entity - one user's like or dislike on a book or chapter
//!
//! At most one reaction exists per (user, target); setting a new kind
//! replaces the old one.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{ReactionKind, Snowflake, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub target: Target,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    pub fn new(id: Snowflake, user_id: Snowflake, target: Target, kind: ReactionKind) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            target,
            kind,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A user who reacted to a target, in reaction order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reactor {
    pub user_id: Snowflake,
    pub username: String,
    pub kind: ReactionKind,
}

/// Like/dislike totals for a target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReactionCounts {
    pub likes: i64,
    pub dislikes: i64,
}

impl ReactionCounts {
    /// Tally a list of reactors
    pub fn from_reactors(reactors: &[Reactor]) -> Self {
        reactors.iter().fold(Self::default(), |mut acc, r| {
            match r.kind {
                ReactionKind::Like => acc.likes += 1,
                ReactionKind::Dislike => acc.dislikes += 1,
            }
            acc
        })
    }
}
