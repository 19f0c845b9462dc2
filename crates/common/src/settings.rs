//! Client configuration.
//!
//! Settings are read from a TOML file and merged with environment variables
//! prefixed with `VAULT_CLIENT__`. For example, `VAULT_CLIENT__API__API_KEY`
//! overrides `api.api_key` in the file.

use std::fs;
use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use error_stack::{Report, ResultExt};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{DEFAULT_BASE_URL, ENV_PREFIX};
use crate::credentials::Credentials;
use crate::error::VaultClientError;

const DEFAULT_VAULT_NAME: &str = "QuickStart_Vault";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_vault_name() -> String {
    DEFAULT_VAULT_NAME.to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Api {
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,
    #[validate(length(min = 1))]
    pub api_key: String,
    #[validate(length(min = 1))]
    pub private_key_path: String,
}

/// Parameters for the vault account created by the `demo` command.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Demo {
    #[serde(default = "default_vault_name")]
    #[validate(length(min = 1))]
    pub vault_name: String,
    #[serde(default)]
    pub hidden_on_ui: bool,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            vault_name: default_vault_name(),
            hidden_on_ui: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub api: Api,
    #[serde(default)]
    #[validate(nested)]
    pub demo: Demo,
}

impl Settings {
    /// Parses `toml_str`, applies environment overrides and validates.
    ///
    /// # Errors
    ///
    /// Returns [`VaultClientError::Configuration`] if the TOML is invalid,
    /// required fields are missing, or validation fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, Report<VaultClientError>> {
        let environment = Environment::default()
            .prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true);

        let toml = File::from_str(toml_str, FileFormat::Toml);
        let settings: Self = Config::builder()
            .add_source(toml)
            .add_source(environment)
            .build()
            .and_then(Config::try_deserialize)
            .change_context(VaultClientError::Configuration {
                message: "Failed to parse and merge settings".into(),
            })?;

        settings
            .validate()
            .change_context(VaultClientError::Configuration {
                message: "Settings validation failed".into(),
            })?;

        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns [`VaultClientError::Configuration`] if the file cannot be read
    /// or its content is rejected by [`Settings::from_toml`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Report<VaultClientError>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .change_context(VaultClientError::Configuration {
                message: "Failed to read settings file".into(),
            })
            .attach(format!("path: {}", path.display()))?;

        log::debug!("Loading settings from {}", path.display());

        Self::from_toml(&content).attach(format!("path: {}", path.display()))
    }

    /// Reads the private key named by `api.private_key_path`.
    ///
    /// # Errors
    ///
    /// Returns [`VaultClientError::KeyLoad`] if the key file cannot be loaded.
    pub fn load_credentials(&self) -> Result<Credentials, Report<VaultClientError>> {
        Credentials::from_key_file(&self.api.api_key, &self.api.private_key_path)
    }
}
