//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validated bodies, and path parsing.

mod auth;
mod path;
mod validated;

pub use auth::AuthUser;
pub use path::{parse_id, parse_target};
pub use validated::ValidatedJson;
