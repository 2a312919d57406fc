//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_USER_AGENT, GRANT_URL_DEVELOPMENT, GRANT_URL_PRODUCTION,
    GRANT_URL_STAGING,
};
use crate::impl_domain_enum_conversions;

/// Deployment environment of the rewards services
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    #[default]
    Production,
}

impl_domain_enum_conversions!(Environment {
    Development => "development",
    Staging => "staging",
    Production => "production",
});

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rewards: EnvironmentConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Environment selection and service endpoints.
///
/// Immutable once handed to an endpoint; every request reads the same
/// snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub environment: Environment,
    /// Explicit grant service base URL; wins over the environment default.
    #[serde(default)]
    pub grant_url: Option<String>,
}

impl EnvironmentConfig {
    /// Configuration for one of the hosted environments.
    pub fn new(environment: Environment) -> Self {
        Self { environment, grant_url: None }
    }

    /// Configuration pinned to a specific grant service base URL.
    pub fn with_grant_url(mut self, url: impl Into<String>) -> Self {
        self.grant_url = Some(url.into());
        self
    }

    /// Base URL of the grant (promotion) service.
    pub fn rewards_grant_url(&self) -> &str {
        if let Some(url) = self.grant_url.as_deref() {
            return url;
        }

        match self.environment {
            Environment::Development => GRANT_URL_DEVELOPMENT,
            Environment::Staging => GRANT_URL_STAGING,
            Environment::Production => GRANT_URL_PRODUCTION,
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}
