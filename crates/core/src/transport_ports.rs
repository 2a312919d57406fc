//! HTTP transport port

use async_trait::async_trait;
use rewards_domain::{LogLevel, Result, UrlRequest, UrlResponse};

/// Submits requests to remote services.
///
/// Connection handling, TLS and timeouts belong to the implementation.
#[async_trait]
pub trait UrlLoader: Send + Sync {
    /// Send `request` once and wait for the response.
    ///
    /// Any HTTP status counts as a response. Failures to obtain one at all
    /// (connection, DNS, TLS, timeout) are returned as
    /// [`RewardsError::Network`](rewards_domain::RewardsError::Network).
    async fn load(&self, request: UrlRequest, log_level: LogLevel) -> Result<UrlResponse>;
}
