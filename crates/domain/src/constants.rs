//! Wire-level constants shared by the endpoint and its adapters.

// Grant service hosts
pub const GRANT_URL_PRODUCTION: &str = "https://grant.rewards.brave.com";
pub const GRANT_URL_STAGING: &str = "https://grant.rewards.bravesoftware.com";
pub const GRANT_URL_DEVELOPMENT: &str = "https://grant.rewards.brave.software";

// Request envelope
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

// HTTP status codes the endpoints classify explicitly
pub const HTTP_OK: u16 = 200;
pub const HTTP_INTERNAL_SERVER_ERROR: u16 = 500;

// Transport defaults
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "rewards-ledger/0.1";
