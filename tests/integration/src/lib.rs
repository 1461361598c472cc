//! Integration test utilities for the bookworm server
//!
//! Spawns the real router on an ephemeral port, backed by the in-memory
//! store, and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
