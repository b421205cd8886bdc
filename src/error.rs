//! Errors raised while building or sending a request to the Account Protect API.
//!
//! Configuration problems live in [`crate::config`]; everything here happens
//! per call, after a [`crate::Client`] exists.

use thiserror::Error;

/// Errors that can occur during a validate or collect call.
#[derive(Debug, Error)]
pub enum FraudError {
    /// The peer address of the inbound request is missing or malformed.
    #[error("fail to parse request's IP: {0}")]
    IpExtraction(String),

    /// The outbound payload could not be encoded. Nothing was sent.
    #[error("fail to marshal request payload: {0}")]
    Serialization(serde_json::Error),

    /// The call did not complete within the configured timeout.
    #[error("request to Account Protect API timeout")]
    Timeout,

    /// Any other transport failure (connect, TLS, body read).
    #[error("error when performing HTTP request to the Account Protect API: {0}")]
    Transport(reqwest::Error),

    /// A 2xx response body did not match the expected shape.
    #[error("fail to parse API's response: {0}")]
    Decode(serde_json::Error),
}

impl FraudError {
    /// True for the distinguished timeout condition.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FraudError::Timeout)
    }
}

/// Result type for per-call operations.
pub type Result<T> = std::result::Result<T, FraudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FraudError::Timeout.to_string(),
            "request to Account Protect API timeout"
        );

        let err = FraudError::IpExtraction("missing port in address".into());
        assert!(err.to_string().contains("missing port"));
        assert!(!err.is_timeout());
        assert!(FraudError::Timeout.is_timeout());
    }

    #[test]
    fn test_cause_reported_once() {
        let cause = serde_json::from_str::<u32>("x").unwrap_err();
        let err = FraudError::Decode(cause);
        assert!(err.to_string().starts_with("fail to parse API's response: "));
        assert!(std::error::Error::source(&err).is_none());
    }
}
