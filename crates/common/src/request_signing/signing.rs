//! Request token signing.
//!
//! Every outbound request carries an RS256 JWT whose claims bind the caller's
//! API key, a fresh nonce, a 55 second validity window, the request path and
//! the SHA-256 of the request body.

use std::fmt;

use error_stack::{Report, ResultExt};
use jsonwebtoken::{crypto, encode, Algorithm, EncodingKey, Header};

use crate::constants::TOKEN_LIFETIME_SECS;
use crate::credentials::{mask_api_key, Credentials};
use crate::error::VaultClientError;

use super::claims::{body_hash, SignedRequestClaims};
use super::sources::{Clock, NonceSource, SystemClock, UuidNonceSource};

const KEY_PROBE_PAYLOAD: &[u8] = b"key-probe";

fn parse_rsa_signing_key(pem: &str) -> Result<EncodingKey, Report<VaultClientError>> {
    let key = EncodingKey::from_rsa_pem(pem.as_bytes()).map_err(|e| {
        Report::new(VaultClientError::KeySpec {
            message: format!("Failed to decode RSA private key: {e}"),
        })
    })?;

    // from_rsa_pem only unwraps the PEM; the DER is not parsed until first use.
    crypto::sign(KEY_PROBE_PAYLOAD, &key, Algorithm::RS256).map_err(|e| {
        Report::new(VaultClientError::KeySpec {
            message: format!("RSA private key rejected: {e}"),
        })
    })?;

    Ok(key)
}

pub struct RequestSigner {
    api_key: String,
    key: EncodingKey,
    clock: Box<dyn Clock>,
    nonces: Box<dyn NonceSource>,
}

impl RequestSigner {
    /// Builds a signer from already-loaded credentials, using the system
    /// clock and random UUID v4 nonces.
    ///
    /// # Errors
    ///
    /// Returns [`VaultClientError::KeySpec`] if the private key is not a
    /// usable RSA key.
    pub fn new(credentials: &Credentials) -> Result<Self, Report<VaultClientError>> {
        let key = parse_rsa_signing_key(credentials.private_key_pem())?;

        Ok(Self {
            api_key: credentials.api_key().to_string(),
            key,
            clock: Box::new(SystemClock),
            nonces: Box::new(UuidNonceSource),
        })
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_nonce_source(mut self, nonces: impl NonceSource + 'static) -> Self {
        self.nonces = Box::new(nonces);
        self
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Claims for one request to `path` carrying `body` (empty for GET).
    #[must_use]
    pub fn claims_for(&self, path: &str, body: &[u8]) -> SignedRequestClaims {
        let iat = self.clock.now();

        SignedRequestClaims {
            sub: self.api_key.clone(),
            iat,
            exp: iat + TOKEN_LIFETIME_SECS,
            nonce: self.nonces.next_nonce(),
            uri: path.to_string(),
            body_hash: body_hash(body),
        }
    }

    /// Signs a fresh token for `path` and `body`. Nothing is cached: each call
    /// gets a new nonce and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`VaultClientError::Signing`] if encoding the token fails.
    pub fn sign(&self, path: &str, body: &[u8]) -> Result<String, Report<VaultClientError>> {
        let claims = self.claims_for(path, body);

        encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .change_context(VaultClientError::Signing {
                message: "Failed to encode request token".into(),
            })
            .attach(format!("uri: {path}"))
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &mask_api_key(&self.api_key))
            .finish_non_exhaustive()
    }
}
