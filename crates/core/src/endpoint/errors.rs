//! Failure classification for grant service endpoints
//!
//! Callers only ever see a result code. These errors exist so each failure
//! reason lands in logs under its own category.

use rewards_domain::RewardsError;
use thiserror::Error;

/// Why an endpoint call did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("Rewards wallet is unavailable")]
    WalletUnavailable,

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Unable to sign request: {0}")]
    Signing(String),

    #[error("Transport failure: {0}")]
    Transport(RewardsError),

    #[error("Internal server error")]
    ServerError,

    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),
}

impl EndpointError {
    /// Stable log category for this failure.
    pub fn category(&self) -> &'static str {
        match self {
            Self::WalletUnavailable => "wallet_unavailable",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Signing(_) => "signing_failure",
            Self::Transport(_) => "transport_failure",
            Self::ServerError => "server_error",
            Self::UnexpectedStatus(_) => "unexpected_status",
        }
    }
}
