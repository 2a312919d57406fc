//! Shared fixtures for `rewards-infra` integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use rewards_core::LossReportClient;
use rewards_domain::{Config, Environment, EnvironmentConfig, HttpConfig, RewardsWallet};
use rewards_infra::{loss_report_client, JsonFileWalletStore};
use tempfile::TempDir;

pub const PAYMENT_ID: &str = "abc123";
pub const SEED: [u8; 32] = [42u8; 32];

pub fn wallet() -> RewardsWallet {
    RewardsWallet::new(PAYMENT_ID, SEED.to_vec())
}

/// Configuration pointing the grant service at `base_url`.
pub fn config_for(base_url: &str) -> Config {
    Config {
        rewards: EnvironmentConfig::new(Environment::Development).with_grant_url(base_url),
        http: HttpConfig { timeout_secs: 5, user_agent: "rewards-infra-tests".into() },
    }
}

/// Wallet file on disk that lives as long as the fixture.
pub struct WalletFixture {
    pub store: JsonFileWalletStore,
    _dir: TempDir,
}

impl WalletFixture {
    /// Directory with no wallet file in it.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = JsonFileWalletStore::new(dir.path().join("wallet.json"));
        Self { store, _dir: dir }
    }

    /// Directory holding `wallet`.
    pub async fn with_wallet(wallet: &RewardsWallet) -> Self {
        let fixture = Self::empty();
        fixture.store.save(wallet).await.expect("wallet should be saved");
        fixture
    }

    pub fn client(&self, base_url: &str) -> Arc<LossReportClient> {
        let client = loss_report_client(&config_for(base_url), Arc::new(self.store.clone()))
            .expect("client should be built");
        Arc::new(client)
    }
}
