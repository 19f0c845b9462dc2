//! Receiving-side checks for signed request tokens.
//!
//! A token is only accepted for the exact path and body it was signed for:
//! the `uri` claim must equal the request path and `bodyHash` must equal the
//! SHA-256 of the received body.

use error_stack::{Report, ResultExt};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::error::VaultClientError;

use super::claims::{body_hash, SignedRequestClaims};
use super::sources::{Clock, SystemClock};

pub struct RequestVerifier {
    key: DecodingKey,
    clock: Box<dyn Clock>,
    leeway_secs: i64,
}

impl RequestVerifier {
    /// # Errors
    ///
    /// Returns [`VaultClientError::KeySpec`] if `public_key_pem` is not an RSA
    /// public key.
    pub fn from_rsa_public_pem(public_key_pem: &str) -> Result<Self, Report<VaultClientError>> {
        let key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            Report::new(VaultClientError::KeySpec {
                message: format!("Failed to decode RSA public key: {e}"),
            })
        })?;

        Ok(Self {
            key,
            clock: Box::new(SystemClock),
            leeway_secs: 0,
        })
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Tolerated clock skew, applied to both `exp` and `iat`.
    #[must_use]
    pub fn with_leeway(mut self, leeway_secs: u32) -> Self {
        self.leeway_secs = i64::from(leeway_secs);
        self
    }

    /// Verifies `token` for a request to `path` carrying `body`.
    ///
    /// # Errors
    ///
    /// Returns [`VaultClientError::Verification`] if the signature is invalid,
    /// a required claim is missing, the token is expired or issued in the
    /// future, or the token was signed for another path or body.
    pub fn verify(
        &self,
        token: &str,
        path: &str,
        body: &[u8],
    ) -> Result<SignedRequestClaims, Report<VaultClientError>> {
        let mut validation = Validation::new(Algorithm::RS256);
        // Expiry is checked below against the injected clock.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        let claims = decode::<SignedRequestClaims>(token, &self.key, &validation)
            .change_context(VaultClientError::Verification {
                message: "Token signature or structure is invalid".into(),
            })?
            .claims;

        let now = self.clock.now();
        if now > claims.exp + self.leeway_secs {
            return Err(Report::new(VaultClientError::Verification {
                message: "Token has expired".into(),
            })
            .attach(format!("exp: {}, now: {now}", claims.exp)));
        }

        if claims.iat > now + self.leeway_secs {
            return Err(Report::new(VaultClientError::Verification {
                message: "Token issued in the future".into(),
            })
            .attach(format!("iat: {}, now: {now}", claims.iat)));
        }

        if claims.uri != path {
            return Err(Report::new(VaultClientError::Verification {
                message: "Token was signed for a different path".into(),
            })
            .attach(format!("token uri: {}, request path: {path}", claims.uri)));
        }

        if claims.body_hash != body_hash(body) {
            return Err(Report::new(VaultClientError::Verification {
                message: "Token body hash does not match request body".into(),
            }));
        }

        Ok(claims)
    }
}
