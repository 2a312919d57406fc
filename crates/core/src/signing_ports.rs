//! Request signing ports
//!
//! Grant service endpoints that act on behalf of a wallet require a signed
//! request. The signature scheme lives in infrastructure; the endpoints only
//! decide when signing happens and what a failure means.

use rewards_domain::{Result, RewardsWallet, UrlRequest};

/// Signs outbound requests with credentials bound at construction.
pub trait RequestSigner: Send + Sync {
    /// Add the signature headers to `request`.
    ///
    /// A request must not be sent when this returns an error.
    fn sign_request(&self, request: &mut UrlRequest) -> Result<()>;
}

/// Builds a [`RequestSigner`] from a wallet's credentials.
pub trait SignerFactory: Send + Sync {
    /// Returns `None` when the wallet credentials cannot produce a signer.
    fn signer_for(&self, wallet: &RewardsWallet) -> Option<Box<dyn RequestSigner>>;
}
