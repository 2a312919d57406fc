use async_trait::async_trait;
use rewards_core::WalletProvider;
use rewards_domain::RewardsWallet;
use tokio::sync::RwLock;

/// In-memory wallet holder for embedding hosts that manage wallet state
/// themselves.
#[derive(Debug, Default)]
pub struct StaticWalletProvider {
    wallet: RwLock<Option<RewardsWallet>>,
}

impl StaticWalletProvider {
    pub fn new(wallet: Option<RewardsWallet>) -> Self {
        Self { wallet: RwLock::new(wallet) }
    }

    /// Replace the current wallet; later requests see the new snapshot.
    pub async fn set(&self, wallet: Option<RewardsWallet>) {
        *self.wallet.write().await = wallet;
    }
}

#[async_trait]
impl WalletProvider for StaticWalletProvider {
    async fn wallet(&self) -> Option<RewardsWallet> {
        self.wallet.read().await.clone()
    }
}
