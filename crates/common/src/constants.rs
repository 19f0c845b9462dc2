use std::time::Duration;

use ureq::http::header::HeaderName;

pub const HEADER_X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

pub const DEFAULT_BASE_URL: &str = "https://api.fireblocks.io";

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Upper bound on establishing a connection to the API host.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Seconds between `iat` and `exp` on every signed request token.
pub const TOKEN_LIFETIME_SECS: i64 = 55;

pub const ENV_PREFIX: &str = "VAULT_CLIENT";
