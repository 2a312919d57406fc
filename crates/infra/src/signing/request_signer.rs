//! Ed25519 HTTP signatures
//!
//! Signed requests carry three extra headers:
//!
//! ```text
//! digest: SHA-256=<base64(sha256(body))>
//! signature: keyId="<payment id>",algorithm="ed25519",headers="digest (request-target)",signature="<base64>"
//! accept: application/json
//! ```
//!
//! The signature covers the lines `digest: <digest>` and
//! `(request-target): <method> <path>` joined by `\n`, with the method in
//! lowercase and the path including any query string.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ed25519_dalek::{Signer, SigningKey};
use rewards_core::{RequestSigner, SignerFactory};
use rewards_domain::{Result, RewardsError, RewardsWallet, UrlRequest};
use sha2::{Digest, Sha256};
use tracing::warn;
use url::Url;

const SIGNATURE_ALGORITHM: &str = "ed25519";
const SEED_LENGTH: usize = 32;

/// Signs requests with a wallet's Ed25519 key.
pub struct Ed25519RequestSigner {
    key_id: String,
    signing_key: SigningKey,
}

impl Ed25519RequestSigner {
    pub fn new(key_id: impl Into<String>, signing_key: SigningKey) -> Self {
        Self { key_id: key_id.into(), signing_key }
    }

    /// Signer keyed by the wallet's payment id.
    ///
    /// Returns `None` for a payment id that cannot appear unquoted in the
    /// `keyId` parameter or a seed that is not exactly 32 bytes.
    pub fn from_wallet(wallet: &RewardsWallet) -> Option<Self> {
        if !is_valid_key_id(&wallet.payment_id) {
            return None;
        }

        let seed: [u8; SEED_LENGTH] = wallet.recovery_seed.as_slice().try_into().ok()?;
        Some(Self::new(wallet.payment_id.clone(), SigningKey::from_bytes(&seed)))
    }

    /// `digest` header value for `body`.
    pub fn digest(body: &str) -> String {
        format!("SHA-256={}", BASE64.encode(Sha256::digest(body.as_bytes())))
    }

    /// `signature` header value covering `headers` in order.
    pub fn sign_headers(&self, headers: &[(&str, &str)]) -> String {
        let message = signing_string(headers);
        let signature = self.signing_key.sign(message.as_bytes());
        let names: Vec<&str> = headers.iter().map(|(name, _)| *name).collect();

        format!(
            r#"keyId="{}",algorithm="{}",headers="{}",signature="{}""#,
            self.key_id,
            SIGNATURE_ALGORITHM,
            names.join(" "),
            BASE64.encode(signature.to_bytes())
        )
    }
}

impl RequestSigner for Ed25519RequestSigner {
    fn sign_request(&self, request: &mut UrlRequest) -> Result<()> {
        let url = Url::parse(&request.url)
            .map_err(|e| RewardsError::Signing(format!("cannot sign '{}': {e}", request.url)))?;

        let mut target = url.path().to_string();
        if let Some(query) = url.query() {
            target.push('?');
            target.push_str(query);
        }
        let request_target = format!("{} {}", request.method, target);

        let digest = Self::digest(&request.content);
        let signature = self.sign_headers(&[
            ("digest", digest.as_str()),
            ("(request-target)", request_target.as_str()),
        ]);

        request.add_header("digest", &digest);
        request.add_header("signature", &signature);
        request.add_header("accept", "application/json");
        Ok(())
    }
}

/// Builds [`Ed25519RequestSigner`]s from wallet recovery seeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519SignerFactory;

impl SignerFactory for Ed25519SignerFactory {
    fn signer_for(&self, wallet: &RewardsWallet) -> Option<Box<dyn RequestSigner>> {
        match Ed25519RequestSigner::from_wallet(wallet) {
            Some(signer) => Some(Box::new(signer)),
            None => {
                warn!(
                    payment_id = %wallet.payment_id,
                    seed_len = wallet.recovery_seed.len(),
                    "wallet credentials cannot produce a signing key"
                );
                None
            }
        }
    }
}

/// Non-empty, printable, and free of the quote, comma and backslash that
/// delimit signature parameters.
fn is_valid_key_id(key_id: &str) -> bool {
    !key_id.is_empty()
        && key_id.chars().all(|c| !c.is_control() && !matches!(c, '"' | ',' | '\\'))
}

fn signing_string(headers: &[(&str, &str)]) -> String {
    headers.iter().map(|(name, value)| format!("{name}: {value}")).collect::<Vec<_>>().join("\n")
}
