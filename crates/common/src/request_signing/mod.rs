//! Request signing utilities for authenticated API calls.
//!
//! This module builds the per-request RS256 token (claims, signer, time and
//! nonce sources) and the matching receiving-side verification.

pub mod claims;
pub mod signing;
pub mod sources;
pub mod verification;

pub use claims::*;
pub use signing::*;
pub use sources::*;
pub use verification::*;
