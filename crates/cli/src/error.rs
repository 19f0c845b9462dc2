//! CLI error types.

use std::fmt;

use error_stack::Report;
use vault_client_common::error::VaultClientError;

#[derive(Debug)]
pub enum CliError {
    /// Bad command-line input
    Usage(String),
    /// Failure reported by the client library
    Client(Report<VaultClientError>),
    /// Output could not be rendered
    Output(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "Usage error: {}", msg),
            CliError::Client(report) => write!(f, "{:?}", report),
            CliError::Output(err) => write!(f, "Output error: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Output(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Report<VaultClientError>> for CliError {
    fn from(report: Report<VaultClientError>) -> Self {
        CliError::Client(report)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err)
    }
}
