//! Error types for the vault client.
//!
//! All fallible operations return `Result<T, Report<VaultClientError>>`, so
//! callers get the full attachment chain when a failure is printed.

use derive_more::{Display, Error};

/// Context for every error surfaced by this crate.
#[derive(Debug, Display, Error)]
pub enum VaultClientError {
    /// The private key file could not be read or is not PEM-wrapped.
    #[display("Key load error: {message}")]
    KeyLoad { message: String },

    /// The key material does not decode to a usable RSA private key.
    #[display("Key spec error: {message}")]
    KeySpec { message: String },

    /// Producing the signed token failed.
    #[display("Signing error: {message}")]
    Signing { message: String },

    /// Network, I/O, or response decoding failure.
    #[display("Transport error: {message}")]
    Transport { message: String },

    /// A presented token was rejected.
    #[display("Verification error: {message}")]
    Verification { message: String },

    /// Settings could not be loaded or failed validation.
    #[display("Configuration error: {message}")]
    Configuration { message: String },
}
