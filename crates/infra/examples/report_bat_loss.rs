//! Example: Reporting a BAT loss event to the grant service
//!
//! Loads configuration (environment variables first, then `rewards.toml` /
//! `config.toml`), reads the wallet from a JSON file and submits one signed
//! loss report.
//!
//! ```bash
//! export REWARDS_ENVIRONMENT=staging
//! export REWARDS_WALLET_PATH=./wallet.json
//! RUST_LOG=debug cargo run -p rewards-infra --example report_bat_loss -- 12.5 8
//! ```
//!
//! The wallet file looks like
//! `{"payment_id": "...", "recovery_seed": "<base64 of 32 bytes>"}`.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use anyhow::{bail, Context};
use rewards_domain::LossReportResult;
use rewards_infra::{config, loss_report_client, JsonFileWalletStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let amount: f64 = args.next().context("usage: report_bat_loss <amount> <version>")?.parse()?;
    let version: i32 = args.next().context("usage: report_bat_loss <amount> <version>")?.parse()?;

    let config = config::load().context("loading configuration")?;
    let wallet_path =
        std::env::var("REWARDS_WALLET_PATH").unwrap_or_else(|_| "wallet.json".to_string());

    println!("Grant service: {}", config.rewards.rewards_grant_url());
    println!("Wallet file:   {wallet_path}");

    let client = loss_report_client(&config, Arc::new(JsonFileWalletStore::new(wallet_path)))?;

    match client.report_loss(amount, version).await {
        LossReportResult::Ok => {
            println!("✓ Reported loss of {amount} BAT (schema v{version})");
            Ok(())
        }
        LossReportResult::Failed => bail!("loss report failed; see logs for the reason"),
    }
}
