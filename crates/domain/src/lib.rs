//! # Rewards Domain
//!
//! Business domain types for the rewards ledger client.
//!
//! This crate contains:
//! - Wallet identity and URL request/response records
//! - Endpoint result codes
//! - Domain error types and Result definitions
//! - Environment configuration structures
//!
//! ## Architecture
//! - No dependencies on other rewards crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
