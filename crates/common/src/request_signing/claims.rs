//! Claim set carried by each signed request token.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `body`. Always 64 characters; an absent body
/// hashes as the empty byte sequence.
#[must_use]
pub fn body_hash(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}

/// Claims bound into one request token. Built fresh per call and discarded
/// once the token is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedRequestClaims {
    /// API key of the caller.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub nonce: String,
    /// Request path, verbatim.
    pub uri: String,
    #[serde(rename = "bodyHash")]
    pub body_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_body_hash_empty() {
        assert_eq!(body_hash(b""), EMPTY_SHA256);
    }

    #[test]
    fn test_body_hash_known_value() {
        assert_eq!(
            body_hash(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_body_hash_keeps_leading_zero_bytes() {
        let hash = body_hash(b"message 35");
        assert_eq!(
            hash,
            "006c08439391f6ddc40844a41eb8faf8051e94e463c67fe4df744391115b1330"
        );
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_body_hash_format() {
        let bodies: [&[u8]; 4] = [b"", b"{}", b"{\"name\":\"vault\"}", &[0xff; 1024]];
        for body in bodies {
            let hash = body_hash(body);
            assert_eq!(hash.len(), 64);
            assert!(hash
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn test_body_hash_deterministic() {
        let body = br#"{"name":"vault","hiddenOnUI":true}"#;
        assert_eq!(body_hash(body), body_hash(body));
        assert_ne!(body_hash(body), body_hash(b"{}"));
    }

    #[test]
    fn test_claims_wire_names() {
        let claims = SignedRequestClaims {
            sub: "key".into(),
            iat: 10,
            exp: 65,
            nonce: "n".into(),
            uri: "/v1/vault/accounts".into(),
            body_hash: EMPTY_SHA256.into(),
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["bodyHash"], EMPTY_SHA256);
        assert_eq!(json["uri"], "/v1/vault/accounts");
        assert!(json.get("body_hash").is_none());

        let parsed: SignedRequestClaims = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, claims);
    }
}
