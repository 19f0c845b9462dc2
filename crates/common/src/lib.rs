//! Signed-request client for the vault REST API.
//!
//! Every call is authenticated with an API key header plus a short-lived RS256
//! token bound to the request path and body.
//!
//! # Modules
//!
//! - [`client`]: Blocking HTTP client that signs and sends requests
//! - [`constants`]: Header names, default endpoint and timing constants
//! - [`credentials`]: API key and private key loading
//! - [`error`]: Error types and error handling utilities
//! - [`logging`]: Logger initialization
//! - [`request_signing`]: Token claims, signing and verification
//! - [`settings`]: Configuration management and validation
//! - [`test_support`]: Testing utilities and fixtures
//! - [`vault`]: Vault account calls

pub mod client;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod request_signing;
pub mod settings;
pub mod test_support;
pub mod vault;
