//! Vault account calls.

use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::VaultClientError;

pub const ACCOUNTS_PAGED_PATH: &str = "/v1/vault/accounts_paged";
pub const ACCOUNTS_PATH: &str = "/v1/vault/accounts";

/// Body of `POST /v1/vault/accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVaultAccount {
    pub name: String,
    #[serde(rename = "hiddenOnUI")]
    pub hidden_on_ui: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_fuel: Option<bool>,
}

impl CreateVaultAccount {
    pub fn new(name: impl Into<String>, hidden_on_ui: bool) -> Self {
        Self {
            name: name.into(),
            hidden_on_ui,
            customer_ref_id: None,
            auto_fuel: None,
        }
    }
}

/// Fetches the first page of vault accounts.
///
/// # Errors
///
/// Propagates any signing or transport failure from [`ApiClient::get`].
pub fn list_vault_accounts_paged(client: &ApiClient) -> Result<Value, Report<VaultClientError>> {
    client
        .get(ACCOUNTS_PAGED_PATH)
        .attach("while listing vault accounts")
}

/// Creates a vault account.
///
/// # Errors
///
/// Propagates any signing or transport failure from [`ApiClient::post`].
pub fn create_vault_account(
    client: &ApiClient,
    request: &CreateVaultAccount,
) -> Result<Value, Report<VaultClientError>> {
    log::info!("Creating vault account '{}'", request.name);

    client
        .post(ACCOUNTS_PATH, request)
        .attach(format!("while creating vault account '{}'", request.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_minimal_wire_format() {
        let request = CreateVaultAccount::new("QuickStart_Vault", true);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"name":"QuickStart_Vault","hiddenOnUI":true}"#
        );
    }

    #[test]
    fn test_create_request_optional_fields() {
        let request = CreateVaultAccount {
            customer_ref_id: Some("cust-7".into()),
            auto_fuel: Some(false),
            ..CreateVaultAccount::new("Treasury", false)
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "Treasury",
                "hiddenOnUI": false,
                "customerRefId": "cust-7",
                "autoFuel": false
            })
        );
    }
}
