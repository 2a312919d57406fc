//! # Rewards Core
//!
//! Endpoint logic for the rewards ledger client - no infrastructure
//! dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for wallets, signing and transport
//! - Grant service endpoints built on those ports
//! - URL helpers shared by endpoints
//!
//! ## Architecture Principles
//! - Only depends on `rewards-domain`
//! - No HTTP, storage, or cryptography code
//! - All external dependencies via traits

pub mod endpoint;
pub mod utils;

// Infrastructure ports
pub mod signing_ports;
pub mod transport_ports;
pub mod wallet_ports;

// Re-export specific items to avoid ambiguity
pub use endpoint::promotion::LossReportClient;
pub use endpoint::EndpointError;
pub use signing_ports::{RequestSigner, SignerFactory};
pub use transport_ports::UrlLoader;
pub use wallet_ports::WalletProvider;
