//! # Rewards Infrastructure
//!
//! Infrastructure implementations of core endpoint ports.
//!
//! This crate contains:
//! - HTTP transport (reqwest) implementing `UrlLoader`
//! - Ed25519 request signing implementing `SignerFactory`
//! - Wallet providers (JSON file, in-memory)
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Implements traits defined in `rewards-core`
//! - Depends on `rewards-domain` and `rewards-core`
//! - Contains all "impure" code (I/O, network, cryptography)

pub mod config;
pub mod errors;
pub mod http;
pub mod signing;
pub mod wallet;

use std::sync::Arc;

use rewards_core::{LossReportClient, WalletProvider};
use rewards_domain::{Config, Result};

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, ReqwestUrlLoader};
pub use signing::{Ed25519RequestSigner, Ed25519SignerFactory};
pub use wallet::{JsonFileWalletStore, StaticWalletProvider};

/// Wire a [`LossReportClient`] to the production adapters.
///
/// # Errors
/// Returns an error if the HTTP client cannot be built from `config.http`.
pub fn loss_report_client(
    config: &Config,
    wallets: Arc<dyn WalletProvider>,
) -> Result<LossReportClient> {
    let http = HttpClient::from_config(&config.http)?;

    Ok(LossReportClient::new(
        wallets,
        Arc::new(Ed25519SignerFactory),
        Arc::new(ReqwestUrlLoader::new(http)),
        config.rewards.clone(),
    ))
}
