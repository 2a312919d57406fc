//! Rewards wallet identity

use std::fmt;

/// Snapshot of the user's rewards wallet.
///
/// Owned and persisted by the wallet subsystem; endpoints only read a copy
/// per request.
#[derive(Clone, PartialEq, Eq)]
pub struct RewardsWallet {
    /// Opaque payment identifier assigned by the grant service.
    pub payment_id: String,
    /// Secret seed the request signing key is derived from.
    pub recovery_seed: Vec<u8>,
}

impl RewardsWallet {
    pub fn new(payment_id: impl Into<String>, recovery_seed: impl Into<Vec<u8>>) -> Self {
        Self { payment_id: payment_id.into(), recovery_seed: recovery_seed.into() }
    }
}

// The seed never reaches logs.
impl fmt::Debug for RewardsWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewardsWallet")
            .field("payment_id", &self.payment_id)
            .field("recovery_seed", &"<redacted>")
            .finish()
    }
}
