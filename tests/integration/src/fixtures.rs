//! Test fixtures and data generators
//!
//! Accounts live in the external identity service, so tests seed users
//! straight into storage and mint their tokens with the shared secret.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use bookworm_core::{Snowflake, User};
use serde::Serialize;

use crate::helpers::TestServer;

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A seeded user and a valid access token for them
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Snowflake,
    pub username: String,
    pub token: String,
}

/// Store a new user and issue their token
pub async fn seed_user(server: &TestServer, prefix: &str) -> Result<TestUser> {
    let ctx = server.context();
    let user = User::new(ctx.generate_id(), format!("{prefix}{}", unique_suffix()));
    ctx.user_repo()
        .create(&user)
        .await
        .map_err(|e| anyhow::anyhow!("seed user: {e}"))?;
    let token = ctx
        .jwt_service()
        .issue_access_token(user.id)
        .map_err(|e| anyhow::anyhow!("issue token: {e}"))?;

    Ok(TestUser {
        id: user.id,
        username: user.username,
        token,
    })
}

#[derive(Debug, Serialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub synopsis: String,
    pub cover_image: Option<String>,
}

impl CreateBookRequest {
    pub fn unique() -> Self {
        Self {
            title: format!("Book {}", unique_suffix()),
            synopsis: "A test synopsis".to_string(),
            cover_image: None,
        }
    }

    pub fn with_cover(mut self, cover: &str) -> Self {
        self.cover_image = Some(cover.to_string());
        self
    }
}

#[derive(Debug, Serialize)]
pub struct CreateChapterRequest {
    pub title: String,
    pub content: String,
}

impl CreateChapterRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: format!("{title} content"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReactionRequest {
    pub kind: &'static str,
}

impl ReactionRequest {
    pub fn like() -> Self {
        Self { kind: "like" }
    }

    pub fn dislike() -> Self {
        Self { kind: "dislike" }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentRequest {
    pub content: String,
}

impl CommentRequest {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}
