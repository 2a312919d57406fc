//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use rewards_domain::RewardsError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RewardsError);

impl From<InfraError> for RewardsError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RewardsError> for InfraError {
    fn from(value: RewardsError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRewardsError {
    fn into_rewards(self) -> RewardsError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RewardsError */
/* -------------------------------------------------------------------------- */

impl IntoRewardsError for HttpError {
    fn into_rewards(self) -> RewardsError {
        if self.is_timeout() {
            return RewardsError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return RewardsError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return RewardsError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            return RewardsError::Network(format!(
                "HTTP {} {}",
                code,
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        RewardsError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_rewards())
    }
}

/* -------------------------------------------------------------------------- */
/* JSON / IO errors → RewardsError */
/* -------------------------------------------------------------------------- */

impl IntoRewardsError for serde_json::Error {
    fn into_rewards(self) -> RewardsError {
        RewardsError::InvalidInput(format!("invalid JSON: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_rewards())
    }
}

impl IntoRewardsError for std::io::Error {
    fn into_rewards(self) -> RewardsError {
        match self.kind() {
            std::io::ErrorKind::NotFound => RewardsError::NotFound(self.to_string()),
            _ => RewardsError::Internal(format!("I/O failure: {self}")),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_rewards())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
