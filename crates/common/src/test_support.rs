#[cfg(test)]
pub mod tests {
    use crate::credentials::Credentials;
    use crate::request_signing::{FixedClock, FixedNonce, RequestSigner};

    pub const TEST_PRIVATE_KEY_PEM: &str = include_str!("../tests/fixtures/test_rsa_private.pem");
    pub const TEST_PUBLIC_KEY_PEM: &str = include_str!("../tests/fixtures/test_rsa_public.pem");
    pub const OTHER_PUBLIC_KEY_PEM: &str = include_str!("../tests/fixtures/other_rsa_public.pem");
    pub const EC_PRIVATE_KEY_PEM: &str = include_str!("../tests/fixtures/test_ec_private.pem");

    pub const TEST_API_KEY: &str = "test-api-key";
    pub const TEST_NOW: i64 = 1_700_000_000;
    pub const TEST_NONCE: &str = "00000000-0000-4000-8000-000000000000";

    pub fn create_test_credentials() -> Credentials {
        Credentials::new(TEST_API_KEY, TEST_PRIVATE_KEY_PEM)
    }

    /// Signer with a frozen clock at [`TEST_NOW`] and a constant nonce.
    pub fn create_deterministic_signer() -> RequestSigner {
        RequestSigner::new(&create_test_credentials())
            .expect("test key should parse")
            .with_clock(FixedClock::from_timestamp(TEST_NOW))
            .with_nonce_source(FixedNonce::new(TEST_NONCE))
    }
}
