//! Wallet providers

pub mod json_store;
pub mod static_provider;

pub use json_store::JsonFileWalletStore;
pub use static_provider::StaticWalletProvider;
