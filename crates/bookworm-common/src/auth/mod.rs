//! Bearer token verification
//!
//! Tokens are minted by the external identity service; this crate only
//! needs to check them (and mint them for tests and tooling).

mod jwt;

pub use jwt::{Claims, JwtService};
