//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable consulted when the file leaves `api_key` empty.
pub const API_KEY_ENV: &str = "FRAUD_API_KEY";

/// Error type for configuration loading and client construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("fail to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ConfigError {
    /// True when validation reported the given problem.
    pub fn has(&self, error: &ValidationError) -> bool {
        matches!(self, ConfigError::Validation(errors) if errors.contains(error))
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Like [`load_config`], but an empty `api_key` is taken from `FRAUD_API_KEY`.
pub fn load_config_with_env(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: ClientConfig = toml::from_str(&content)?;

    if config.api_key.is_empty() {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.api_key = key;
        }
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("fraud-sdk-{}-{}.toml", name, std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp(
            "valid",
            "endpoint = \"http://localhost:9000\"\napi_key = \"k\"\ntimeout_ms = 300\n",
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000");
        assert_eq!(config.timeout_ms, 300);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_rejects_missing_key() {
        let path = write_temp("nokey", "timeout_ms = 300\n");
        let err = load_config(&path).unwrap_err();
        assert!(err.has(&ValidationError::KeyMissing));
        assert!(err.to_string().contains("FraudAPIKey must be defined"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let path = write_temp("bad", "timeout_ms = \"soon\"\n");
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/fraud-sdk.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
