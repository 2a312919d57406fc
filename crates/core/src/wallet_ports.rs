//! Wallet access port
//!
//! Wallet state is owned and persisted by the wallet subsystem. Endpoints
//! only read a snapshot of it per request.

use async_trait::async_trait;
use rewards_domain::RewardsWallet;

/// Source of the current rewards wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Snapshot of the current wallet, or `None` when no wallet exists yet
    /// or the stored one is unusable.
    async fn wallet(&self) -> Option<RewardsWallet>;
}
