//! Comment entity - free-text remark on a book or chapter

use chrono::{DateTime, Utc};

use crate::value_objects::{CommentVote, Snowflake, Target};

/// Comment with anonymous like/dislike tallies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub target: Target,
    pub author_id: Snowflake,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Maximum content length in characters
    pub const MAX_CONTENT_LENGTH: usize = 10_000;

    /// Create a new Comment with zeroed tallies
    pub fn new(id: Snowflake, target: Target, author_id: Snowflake, content: String) -> Self {
        Self {
            id,
            target,
            author_id,
            content,
            likes: 0,
            dislikes: 0,
            created_at: Utc::now(),
        }
    }

    /// Apply one vote to the in-memory tallies
    pub fn apply_vote(&mut self, vote: CommentVote) {
        match vote {
            CommentVote::Like => self.likes += 1,
            CommentVote::Dislike => self.dislikes += 1,
        }
    }
}

/// Comment joined with its author's username, as shown in a thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_username: String,
}
