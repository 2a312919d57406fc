//! Wallet persisted as a JSON document
//!
//! ```json
//! { "payment_id": "abc123", "recovery_seed": "<base64, 32 bytes>" }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rewards_core::WalletProvider;
use rewards_domain::{Result, RewardsError, RewardsWallet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::InfraError;

#[derive(Debug, Serialize, Deserialize)]
struct StoredWallet {
    payment_id: String,
    recovery_seed: String,
}

/// Reads the wallet from disk on every lookup so each request works on a
/// fresh snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileWalletStore {
    path: PathBuf,
}

impl JsonFileWalletStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the stored wallet.
    ///
    /// # Errors
    /// - `RewardsError::NotFound` if the file does not exist
    /// - `RewardsError::InvalidInput` for malformed JSON
    /// - `RewardsError::Wallet` for an empty payment id or undecodable seed
    pub async fn load(&self) -> Result<RewardsWallet> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(InfraError::from)?;
        let stored: StoredWallet = serde_json::from_str(&contents).map_err(InfraError::from)?;

        if stored.payment_id.trim().is_empty() {
            return Err(RewardsError::Wallet("payment_id is empty".into()));
        }

        let recovery_seed = BASE64
            .decode(stored.recovery_seed.trim())
            .map_err(|e| RewardsError::Wallet(format!("recovery_seed is not base64: {e}")))?;

        Ok(RewardsWallet { payment_id: stored.payment_id, recovery_seed })
    }

    /// Persist `wallet`, replacing any existing file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, wallet: &RewardsWallet) -> Result<()> {
        let stored = StoredWallet {
            payment_id: wallet.payment_id.clone(),
            recovery_seed: BASE64.encode(&wallet.recovery_seed),
        };
        let json = serde_json::to_string_pretty(&stored).map_err(InfraError::from)?;
        tokio::fs::write(&self.path, json).await.map_err(InfraError::from)?;

        debug!(path = %self.path.display(), "wallet saved");
        Ok(())
    }
}

#[async_trait]
impl WalletProvider for JsonFileWalletStore {
    async fn wallet(&self) -> Option<RewardsWallet> {
        match self.load().await {
            Ok(wallet) => Some(wallet),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    kind = err.label(),
                    error = %err,
                    "wallet unavailable"
                );
                None
            }
        }
    }
}
