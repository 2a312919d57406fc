//! Error types used throughout the rewards ledger client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the rewards ledger client
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RewardsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RewardsError {
    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Signing(_) => "signing",
            Self::Wallet(_) => "wallet",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for rewards operations
pub type Result<T> = std::result::Result<T, RewardsError>;
