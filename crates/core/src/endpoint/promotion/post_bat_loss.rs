//! `POST /v1/wallets/{payment_id}/events/batloss/{version}`
//!
//! Reports an amount of BAT that was lost (e.g. during wallet recovery) to
//! the grant service. The request is signed with the wallet's credentials.
//!
//! Each call consults exactly one wallet snapshot, sends at most one request
//! and yields exactly one [`LossReportResult`]:
//!
//! | outcome                           | result   | log category         |
//! |-----------------------------------|----------|----------------------|
//! | no wallet                         | `Failed` | `wallet_unavailable` |
//! | URL cannot be built               | `Failed` | `invalid_url`        |
//! | no signer / signing rejected      | `Failed` | `signing_failure`    |
//! | transport error                   | `Failed` | `transport_failure`  |
//! | HTTP 500                          | `Failed` | `server_error`       |
//! | any other status except 200       | `Failed` | `unexpected_status`  |
//! | HTTP 200                          | `Ok`     |                      |
//!
//! Nothing is retried. The first three rows never reach the network.

use std::sync::Arc;

use rewards_domain::constants::{HTTP_INTERNAL_SERVER_ERROR, HTTP_OK, JSON_CONTENT_TYPE};
use rewards_domain::{
    EnvironmentConfig, LogLevel, LossReportResult, RewardsWallet, UrlMethod, UrlRequest,
};
use tokio::sync::oneshot;
use tracing::{debug, error, info, instrument};

use crate::endpoint::EndpointError;
use crate::signing_ports::SignerFactory;
use crate::transport_ports::UrlLoader;
use crate::utils::url_helpers;
use crate::wallet_ports::WalletProvider;

/// Client for the BAT loss event endpoint.
pub struct LossReportClient {
    wallets: Arc<dyn WalletProvider>,
    signers: Arc<dyn SignerFactory>,
    loader: Arc<dyn UrlLoader>,
    environment: EnvironmentConfig,
}

impl LossReportClient {
    pub fn new(
        wallets: Arc<dyn WalletProvider>,
        signers: Arc<dyn SignerFactory>,
        loader: Arc<dyn UrlLoader>,
        environment: EnvironmentConfig,
    ) -> Self {
        Self { wallets, signers, loader, environment }
    }

    /// Report `amount` of lost BAT using event schema `version`.
    ///
    /// Neither argument is validated; negative and zero amounts are sent as
    /// given.
    #[instrument(skip(self))]
    pub async fn report_loss(&self, amount: f64, version: i32) -> LossReportResult {
        match self.send_loss_event(amount, version).await {
            Ok(()) => {
                info!(amount, version, "BAT loss reported");
                LossReportResult::Ok
            }
            Err(err) => {
                error!(category = err.category(), error = %err, "BAT loss report failed");
                LossReportResult::Failed
            }
        }
    }

    /// Run [`report_loss`](Self::report_loss) on the tokio runtime and hand
    /// the result back through a single-shot channel.
    ///
    /// The sender is consumed by the one send, so the receiver resolves at
    /// most once. It reports `RecvError` only if the task panicked.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, like [`tokio::spawn`].
    pub fn spawn_report_loss(
        self: &Arc<Self>,
        amount: f64,
        version: i32,
    ) -> oneshot::Receiver<LossReportResult> {
        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(self);

        tokio::spawn(async move {
            let result = client.report_loss(amount, version).await;
            if tx.send(result).is_err() {
                debug!(%result, "loss report receiver dropped before completion");
            }
        });

        rx
    }

    /// Build the endpoint URL for `wallet` and schema `version`.
    ///
    /// Returns an empty string when there is no wallet or the configured base
    /// URL does not resolve. Callers must treat an empty URL as an error and
    /// log it themselves.
    pub fn get_url(&self, wallet: Option<&RewardsWallet>, version: i32) -> String {
        let Some(wallet) = wallet else {
            debug!("no wallet to build the loss event URL from");
            return String::new();
        };

        let version = version.to_string();
        match url_helpers::resolve(
            self.environment.rewards_grant_url(),
            &["/v1/wallets/", &wallet.payment_id, "/events/batloss/", &version],
        ) {
            Ok(url) => url.into(),
            Err(err) => {
                debug!(error = %err, "unable to resolve loss event URL");
                String::new()
            }
        }
    }

    /// JSON body for `amount`, formatted like C's `%f`.
    pub fn generate_payload(amount: f64) -> String {
        format!(r#"{{"amount": {}}}"#, format_fixed(amount))
    }

    /// Map an HTTP status to the endpoint outcome.
    pub fn check_status_code(status_code: u16) -> Result<(), EndpointError> {
        if status_code == HTTP_INTERNAL_SERVER_ERROR {
            return Err(EndpointError::ServerError);
        }

        if status_code != HTTP_OK {
            return Err(EndpointError::UnexpectedStatus(status_code));
        }

        Ok(())
    }

    async fn send_loss_event(&self, amount: f64, version: i32) -> Result<(), EndpointError> {
        let wallet = self.wallets.wallet().await.ok_or(EndpointError::WalletUnavailable)?;

        let url = self.get_url(Some(&wallet), version);
        if url.is_empty() {
            return Err(EndpointError::InvalidUrl(self.environment.rewards_grant_url().to_string()));
        }

        let mut request = UrlRequest::new(UrlMethod::Post, url);
        request.content = Self::generate_payload(amount);
        request.content_type = JSON_CONTENT_TYPE.to_string();

        let signer = self
            .signers
            .signer_for(&wallet)
            .ok_or_else(|| EndpointError::Signing("no signer for wallet credentials".into()))?;
        signer.sign_request(&mut request).map_err(|e| EndpointError::Signing(e.to_string()))?;

        debug!(url = %request.url, "submitting BAT loss event");
        let response =
            self.loader.load(request, LogLevel::Detailed).await.map_err(EndpointError::Transport)?;

        Self::check_status_code(response.status_code)
    }
}

/// Fixed-point with six fractional digits, never scientific notation.
fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        let nan = if value.is_sign_negative() { "-nan" } else { "nan" };
        return nan.to_string();
    }
    format!("{value:.6}")
}
