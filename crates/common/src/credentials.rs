//! API credentials: the key identifier plus the PEM-wrapped RSA private key.
//!
//! Loading is kept apart from signing so a [`RequestSigner`] can be built from
//! key material that came from anywhere (file, secret store, test fixture).
//!
//! [`RequestSigner`]: crate::request_signing::RequestSigner

use std::fmt;
use std::fs;
use std::path::Path;

use error_stack::{Report, ResultExt};

use crate::error::VaultClientError;

const PEM_BEGIN_MARKER: &str = "-----BEGIN";
const MASK_VISIBLE_CHARS: usize = 4;

/// Masks an API key for logs and debug output, keeping a short prefix only
/// when the key is long enough that the prefix does not reveal most of it.
pub(crate) fn mask_api_key(api_key: &str) -> String {
    if api_key.chars().count() <= MASK_VISIBLE_CHARS * 2 {
        return "****".to_string();
    }
    let prefix: String = api_key.chars().take(MASK_VISIBLE_CHARS).collect();
    format!("{prefix}****")
}

pub struct Credentials {
    api_key: String,
    private_key_pem: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, private_key_pem: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            private_key_pem: private_key_pem.into(),
        }
    }

    /// Reads the private key from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`VaultClientError::KeyLoad`] if the file cannot be read, is
    /// empty, or does not contain a PEM block.
    pub fn from_key_file(
        api_key: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, Report<VaultClientError>> {
        let path = path.as_ref();
        let pem = fs::read_to_string(path)
            .change_context(VaultClientError::KeyLoad {
                message: "Failed to read private key file".into(),
            })
            .attach(format!("path: {}", path.display()))?;

        if pem.trim().is_empty() {
            return Err(Report::new(VaultClientError::KeyLoad {
                message: format!("Private key file is empty: {}", path.display()),
            }));
        }

        if !pem.contains(PEM_BEGIN_MARKER) {
            return Err(Report::new(VaultClientError::KeyLoad {
                message: format!("Private key file is not PEM encoded: {}", path.display()),
            }));
        }

        log::debug!("Loaded private key from {}", path.display());

        Ok(Self::new(api_key, pem))
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn private_key_pem(&self) -> &str {
        &self.private_key_pem
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("private_key_pem", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tests::TEST_PRIVATE_KEY_PEM;
    use tempfile::TempDir;

    #[test]
    fn test_from_key_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.key");
        fs::write(&path, TEST_PRIVATE_KEY_PEM).unwrap();

        let credentials = Credentials::from_key_file("api-key-1", &path).unwrap();
        assert_eq!(credentials.api_key(), "api-key-1");
        assert_eq!(credentials.private_key_pem(), TEST_PRIVATE_KEY_PEM);
    }

    #[test]
    fn test_from_key_file_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent.key");

        let err = Credentials::from_key_file("api-key-1", &path).unwrap_err();
        assert!(matches!(
            err.current_context(),
            VaultClientError::KeyLoad { .. }
        ));
    }

    #[test]
    fn test_from_key_file_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.key");
        fs::write(&path, "  \n").unwrap();

        let err = Credentials::from_key_file("api-key-1", &path).unwrap_err();
        assert!(matches!(
            err.current_context(),
            VaultClientError::KeyLoad { message } if message.contains("empty")
        ));
    }

    #[test]
    fn test_from_key_file_not_pem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raw.key");
        fs::write(&path, "MIIEvQIBADANBgkqhkiG9w0BAQEFAASC").unwrap();

        let err = Credentials::from_key_file("api-key-1", &path).unwrap_err();
        assert!(matches!(
            err.current_context(),
            VaultClientError::KeyLoad { message } if message.contains("PEM")
        ));
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(
            mask_api_key("3f9c1a2e-0000-4000-8000-1234567890ab"),
            "3f9c****"
        );
        assert_eq!(mask_api_key("short-key"), "shor****");
        assert_eq!(mask_api_key("tiny"), "****");
        assert_eq!(mask_api_key(""), "****");
    }

    #[test]
    fn test_debug_redacts_private_key_and_masks_api_key() {
        let credentials = Credentials::new("api-key-1", TEST_PRIVATE_KEY_PEM);
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("api-key-1"));
        assert!(debug.contains("api-****"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("BEGIN PRIVATE KEY"));
    }
}
