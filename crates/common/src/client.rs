//! Blocking HTTP client that signs every request.
//!
//! Each call gets two headers: `X-API-Key` with the caller's API key and
//! `Authorization: Bearer <token>` with a token freshly signed for the exact
//! path and body being sent.

use std::fmt;

use error_stack::{Report, ResultExt};
use serde::Serialize;
use serde_json::{Map, Value};
use ureq::http::header::{AUTHORIZATION, CONTENT_TYPE};
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::constants::{CONNECT_TIMEOUT, HEADER_X_API_KEY, JSON_CONTENT_TYPE};
use crate::error::VaultClientError;
use crate::request_signing::RequestSigner;

pub struct ApiClient {
    base_url: String,
    signer: RequestSigner,
    agent: Agent,
}

impl ApiClient {
    /// Creates a client for `base_url`. A trailing `/` is dropped so paths
    /// starting with `/` join cleanly.
    pub fn new(base_url: impl Into<String>, signer: RequestSigner) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        // Non-2xx responses still carry a JSON document worth returning.
        let config = Agent::config_builder()
            .timeout_connect(Some(CONNECT_TIMEOUT))
            .http_status_as_error(false)
            .build();

        Self {
            base_url,
            signer,
            agent: config.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues a signed GET to `base_url + path`.
    ///
    /// # Errors
    ///
    /// Returns [`VaultClientError::Signing`] if the token cannot be produced,
    /// or [`VaultClientError::Transport`] on connection, I/O or decoding
    /// failure.
    pub fn get(&self, path: &str) -> Result<Value, Report<VaultClientError>> {
        let token = self.signer.sign(path, b"")?;
        let url = self.url_for(path);

        log::debug!("GET {url}");

        let response = self
            .agent
            .get(&url)
            .header(HEADER_X_API_KEY, self.signer.api_key())
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .call()
            .change_context(VaultClientError::Transport {
                message: "Failed to send request".into(),
            })
            .attach(format!("GET {url}"))?;

        read_json(response, "GET", &url)
    }

    /// Issues a signed POST of `body` serialized as JSON. The token's body
    /// hash covers exactly the bytes that are sent.
    ///
    /// # Errors
    ///
    /// Returns [`VaultClientError::Signing`] if the token cannot be produced,
    /// or [`VaultClientError::Transport`] on serialization, connection, I/O or
    /// decoding failure.
    pub fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Value, Report<VaultClientError>> {
        let payload = serde_json::to_vec(body).change_context(VaultClientError::Transport {
            message: "Failed to serialize request body".into(),
        })?;
        let token = self.signer.sign(path, &payload)?;
        let url = self.url_for(path);

        log::debug!("POST {url} ({} bytes)", payload.len());

        let response = self
            .agent
            .post(&url)
            .header(HEADER_X_API_KEY, self.signer.api_key())
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .send(payload.as_slice())
            .change_context(VaultClientError::Transport {
                message: "Failed to send request".into(),
            })
            .attach(format!("POST {url}"))?;

        read_json(response, "POST", &url)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}

fn read_json(
    response: Response<Body>,
    method: &str,
    url: &str,
) -> Result<Value, Report<VaultClientError>> {
    let status = response.status();
    let body = response
        .into_body()
        .read_to_string()
        .change_context(VaultClientError::Transport {
            message: "Failed to read response body".into(),
        })
        .attach(format!("{method} {url}"))?;

    if status.is_success() {
        log::debug!("{method} {url} returned HTTP {status}");
    } else {
        log::warn!("{method} {url} returned HTTP {status}");
    }

    parse_json_body(&body).attach(format!("{method} {url} (HTTP {status})"))
}

/// Parses a response body, mapping an absent body to `{}`.
pub(crate) fn parse_json_body(body: &str) -> Result<Value, Report<VaultClientError>> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_str(body).change_context(VaultClientError::Transport {
        message: "Malformed JSON in response body".into(),
    })
}
