//! In-memory port implementations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rewards_core::{RequestSigner, SignerFactory, UrlLoader, WalletProvider};
use rewards_domain::{
    LogLevel, Result, RewardsError, RewardsWallet, UrlRequest, UrlResponse,
};

pub const TEST_SIGNATURE: &str = "keyId=\"test\",signature=\"c2lnbmVk\"";

pub fn test_wallet() -> RewardsWallet {
    RewardsWallet::new("abc123", vec![1u8; 32])
}

/// Wallet provider returning a fixed snapshot.
#[derive(Default)]
pub struct StaticWallets {
    wallet: Option<RewardsWallet>,
    lookups: AtomicUsize,
}

impl StaticWallets {
    pub fn some(wallet: RewardsWallet) -> Arc<Self> {
        Arc::new(Self { wallet: Some(wallet), lookups: AtomicUsize::new(0) })
    }

    pub fn none() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for StaticWallets {
    async fn wallet(&self) -> Option<RewardsWallet> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.wallet.clone()
    }
}

/// How [`FakeSigners`] behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerMode {
    /// Produce a signer that adds a `signature` header.
    Sign,
    /// Produce a signer whose `sign_request` fails.
    Reject,
    /// Produce no signer at all.
    Unavailable,
}

pub struct FakeSigners {
    mode: SignerMode,
    signed_for: Mutex<Vec<String>>,
}

impl FakeSigners {
    pub fn new(mode: SignerMode) -> Arc<Self> {
        Arc::new(Self { mode, signed_for: Mutex::new(Vec::new()) })
    }

    /// Payment ids a signer was requested for.
    pub fn signed_for(&self) -> Vec<String> {
        self.signed_for.lock().expect("signer mutex poisoned").clone()
    }
}

impl SignerFactory for FakeSigners {
    fn signer_for(&self, wallet: &RewardsWallet) -> Option<Box<dyn RequestSigner>> {
        self.signed_for.lock().expect("signer mutex poisoned").push(wallet.payment_id.clone());
        match self.mode {
            SignerMode::Sign => Some(Box::new(FakeSigner { reject: false })),
            SignerMode::Reject => Some(Box::new(FakeSigner { reject: true })),
            SignerMode::Unavailable => None,
        }
    }
}

struct FakeSigner {
    reject: bool,
}

impl RequestSigner for FakeSigner {
    fn sign_request(&self, request: &mut UrlRequest) -> Result<()> {
        if self.reject {
            return Err(RewardsError::Signing("key rejected".into()));
        }
        request.add_header("signature", TEST_SIGNATURE);
        Ok(())
    }
}

type Responder = dyn Fn(&UrlRequest) -> Result<UrlResponse> + Send + Sync;

/// Transport that records every submission and answers through a closure.
pub struct RecordingLoader {
    responder: Box<Responder>,
    submissions: Mutex<Vec<(UrlRequest, LogLevel)>>,
}

impl RecordingLoader {
    pub fn with_status(status: u16) -> Arc<Self> {
        Self::with_responder(move |request| Ok(UrlResponse::with_status(request.url.clone(), status)))
    }

    pub fn failing() -> Arc<Self> {
        Self::with_responder(|_| Err(RewardsError::Network("connection refused".into())))
    }

    pub fn with_responder<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&UrlRequest) -> Result<UrlResponse> + Send + Sync + 'static,
    {
        Arc::new(Self { responder: Box::new(responder), submissions: Mutex::new(Vec::new()) })
    }

    pub fn submissions(&self) -> Vec<(UrlRequest, LogLevel)> {
        self.submissions.lock().expect("loader mutex poisoned").clone()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().expect("loader mutex poisoned").len()
    }
}

#[async_trait]
impl UrlLoader for RecordingLoader {
    async fn load(&self, request: UrlRequest, log_level: LogLevel) -> Result<UrlResponse> {
        let response = (self.responder)(&request);
        self.submissions.lock().expect("loader mutex poisoned").push((request, log_level));
        tokio::task::yield_now().await;
        response
    }
}
