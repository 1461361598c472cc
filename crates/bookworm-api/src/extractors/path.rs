//! Path parameter parsing
//!
//! Malformed IDs and unknown target kinds are rejected with 400 before any
//! service runs.

use bookworm_core::{Snowflake, Target, TargetKind};

use crate::response::ApiError;

/// Parse a Snowflake path segment
pub fn parse_id(value: &str, name: &str) -> Result<Snowflake, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

/// Parse `{targetKind}/{targetId}` into a [`Target`]
pub fn parse_target(kind: &str, id: &str) -> Result<Target, ApiError> {
    let kind: TargetKind = kind
        .parse()
        .map_err(|e: bookworm_core::UnknownVariant| ApiError::invalid_path(e.to_string()))?;
    Ok(Target::new(kind, parse_id(id, "target_id")?))
}
