//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `REWARDS_ENVIRONMENT` is unset, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `REWARDS_ENVIRONMENT`: `development`, `staging` or `production`
//!   (required)
//! - `REWARDS_GRANT_URL`: Grant service base URL override
//! - `REWARDS_HTTP_TIMEOUT_SECS`: Request timeout in seconds
//! - `REWARDS_HTTP_USER_AGENT`: User agent sent with every request
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./rewards.toml` or `./rewards.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use rewards_domain::{Config, Environment, EnvironmentConfig, HttpConfig, Result, RewardsError};

const CONFIG_FILE_NAMES: [&str; 4] = ["rewards.toml", "rewards.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the environment is
/// not selected there, falls back to loading from a config file.
///
/// # Errors
/// Returns `RewardsError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!(
                environment = %config.rewards.environment,
                "Configuration loaded from environment variables"
            );
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `REWARDS_ENVIRONMENT` must be present; every other variable falls back to
/// its default.
///
/// # Errors
/// Returns `RewardsError::Config` if the environment variable is missing or
/// any variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let environment = env_var("REWARDS_ENVIRONMENT")?
        .parse::<Environment>()
        .map_err(RewardsError::Config)?;
    let grant_url = optional_env_var("REWARDS_GRANT_URL");

    let defaults = HttpConfig::default();
    let timeout_secs = match optional_env_var("REWARDS_HTTP_TIMEOUT_SECS") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| RewardsError::Config(format!("Invalid HTTP timeout: {}", e)))?,
        None => defaults.timeout_secs,
    };
    let user_agent = optional_env_var("REWARDS_HTTP_USER_AGENT").unwrap_or(defaults.user_agent);

    Ok(Config {
        rewards: EnvironmentConfig { environment, grant_url },
        http: HttpConfig { timeout_secs, user_agent },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `RewardsError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RewardsError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RewardsError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RewardsError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RewardsError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RewardsError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(RewardsError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory first, then the directory of the
/// running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `RewardsError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        RewardsError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable; blank values count as unset.
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "REWARDS_ENVIRONMENT",
        "REWARDS_GRANT_URL",
        "REWARDS_HTTP_TIMEOUT_SECS",
        "REWARDS_HTTP_USER_AGENT",
    ];

    fn clear_env() {
        for key in VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("REWARDS_ENVIRONMENT", "staging");
        std::env::set_var("REWARDS_GRANT_URL", "https://grant.example/");
        std::env::set_var("REWARDS_HTTP_TIMEOUT_SECS", "12");
        std::env::set_var("REWARDS_HTTP_USER_AGENT", "rewards-test/2.0");

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.rewards.environment, Environment::Staging);
        assert_eq!(config.rewards.rewards_grant_url(), "https://grant.example/");
        assert_eq!(config.http.timeout_secs, 12);
        assert_eq!(config.http.user_agent, "rewards-test/2.0");

        clear_env();
    }

    #[test]
    fn test_load_from_env_defaults_optional_vars() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("REWARDS_ENVIRONMENT", "development");
        std::env::set_var("REWARDS_GRANT_URL", "   ");

        let config = load_from_env().unwrap();
        assert_eq!(config.rewards.environment, Environment::Development);
        assert!(config.rewards.grant_url.is_none());
        assert_eq!(config.http, HttpConfig::default());

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_environment() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, RewardsError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("REWARDS_ENVIRONMENT", "qa");
        assert!(matches!(load_from_env(), Err(RewardsError::Config(_))));

        std::env::set_var("REWARDS_ENVIRONMENT", "production");
        std::env::set_var("REWARDS_HTTP_TIMEOUT_SECS", "soon");
        assert!(matches!(load_from_env(), Err(RewardsError::Config(_))));

        clear_env();
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_content = r#"
[rewards]
environment = "staging"

[http]
timeout_secs = 5
user_agent = "toml-agent"
"#;
        let config = parse_config(toml_content, Path::new("rewards.toml")).unwrap();
        assert_eq!(config.rewards.environment, Environment::Staging);
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.user_agent, "toml-agent");
    }

    #[test]
    fn test_parse_config_unsupported_extension() {
        let err = parse_config("environment: staging", Path::new("rewards.yaml")).unwrap_err();
        assert!(matches!(err, RewardsError::Config(_)));
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "rewards": { "environment": "development", "grant_url": "http://127.0.0.1:8080" },
            "http": { "timeout_secs": 3, "user_agent": "json-agent" }
        }"#;

        let mut temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();

        let config = load_from_file(Some(temp_file.path().to_path_buf())).unwrap();
        assert_eq!(config.rewards.rewards_grant_url(), "http://127.0.0.1:8080");
        assert_eq!(config.http.timeout_secs, 3);
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let mut temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(b"{ not json").unwrap();

        let err = load_from_file(Some(temp_file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, RewardsError::Config(msg) if msg.contains("Invalid JSON")));
    }

    #[test]
    fn test_load_from_file_missing() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().with_extension("missing.toml");

        let err = load_from_file(Some(path)).unwrap_err();
        assert!(matches!(err, RewardsError::Config(msg) if msg.contains("not found")));
    }
}
