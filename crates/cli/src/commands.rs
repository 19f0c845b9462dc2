//! Command implementations.

use serde_json::Value;
use vault_client_common::client::ApiClient;
use vault_client_common::request_signing::RequestSigner;
use vault_client_common::settings::{Demo, Settings};
use vault_client_common::vault::{
    create_vault_account, list_vault_accounts_paged, CreateVaultAccount,
};

use crate::error::CliError;

/// Loads the private key named in `settings` and builds a signing client.
pub fn build_client(settings: &Settings) -> Result<ApiClient, CliError> {
    let credentials = settings.load_credentials()?;
    let signer = RequestSigner::new(&credentials)?;

    log::debug!("Using API endpoint {}", settings.api.base_url);

    Ok(ApiClient::new(settings.api.base_url.clone(), signer))
}

/// Lists vault accounts, then creates one from the `[demo]` settings.
pub fn demo(client: &ApiClient, demo: &Demo) -> Result<(Value, Value), CliError> {
    let accounts = list_vault_accounts_paged(client)?;
    let created = create_vault_account(
        client,
        &CreateVaultAccount::new(demo.vault_name.clone(), demo.hidden_on_ui),
    )?;
    Ok((accounts, created))
}

pub fn accounts(client: &ApiClient) -> Result<Value, CliError> {
    Ok(list_vault_accounts_paged(client)?)
}

pub fn create_account(client: &ApiClient, name: &str, hidden: bool) -> Result<Value, CliError> {
    Ok(create_vault_account(
        client,
        &CreateVaultAccount::new(name, hidden),
    )?)
}

/// Signs a token for `path`. A `body` must be valid JSON and is hashed exactly
/// as given, so it must be byte-for-byte the body that will be sent.
pub fn sign(signer: &RequestSigner, path: &str, body: Option<&str>) -> Result<String, CliError> {
    let payload: &[u8] = match body {
        Some(raw) => {
            serde_json::from_str::<Value>(raw)
                .map_err(|e| CliError::Usage(format!("--body is not valid JSON: {e}")))?;
            raw.as_bytes()
        }
        None => &[],
    };

    Ok(signer.sign(path, payload)?)
}
