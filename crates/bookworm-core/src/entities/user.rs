//! User entity - an account that writes books and reacts to them

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Registered reader or author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, username: String) -> Self {
        Self {
            id,
            username,
            created_at: Utc::now(),
        }
    }
}
