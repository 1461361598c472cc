//! Reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub user_id: i64,
    pub target_kind: String,
    pub target_id: i64,
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reaction joined with the reacting user's name (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactorRow {
    pub user_id: i64,
    pub username: String,
    pub kind: String,
}
