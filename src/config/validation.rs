//! Configuration validation.
//!
//! # Responsibilities
//! - Require a usable API key
//! - Validate value ranges (timeout > 0)
//! - Normalize the endpoint to carry a scheme and check it parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function of the config

use thiserror::Error;

use crate::config::schema::ClientConfig;

/// A single semantic problem with a [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("FraudAPIKey must be defined")]
    KeyMissing,

    /// The key cannot be carried in an HTTP header.
    #[error("FraudAPIKey contains characters not allowed in a header")]
    InvalidApiKey,

    #[error("Timeout must be a positive integer")]
    WrongTimeoutValue,

    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Prepend `https://` to a bare host; keep an explicit scheme, lowercased.
/// Trailing slashes are dropped so paths can be appended directly.
pub fn normalize_endpoint(endpoint: &str) -> String {
    let endpoint = endpoint.trim().trim_end_matches('/');
    match endpoint.split_once("://") {
        Some((scheme, rest)) if is_scheme(scheme) => {
            format!("{}://{}", scheme.to_ascii_lowercase(), rest)
        }
        _ => format!("https://{}", endpoint),
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.api_key.is_empty() {
        errors.push(ValidationError::KeyMissing);
    } else if reqwest::header::HeaderValue::from_str(&config.api_key).is_err() {
        errors.push(ValidationError::InvalidApiKey);
    }

    if config.timeout_ms == 0 {
        errors.push(ValidationError::WrongTimeoutValue);
    }

    let endpoint = normalize_endpoint(&config.endpoint);
    match url::Url::parse(&endpoint) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            })
        }
        Ok(url) if url.host_str().is_some() => {}
        Ok(_) => errors.push(ValidationError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason: "missing host".to_string(),
        }),
        Err(e) => errors.push(ValidationError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason: e.to_string(),
        }),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
