//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Host of the production Account Protect API.
pub const DEFAULT_ENDPOINT: &str = "account-api.datadome.co";

/// Default per-call timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1500;

/// Name reported in the `module` section of every payload.
pub const MODULE_NAME: &str = "Account Protect SDK Rust";

/// Version reported in the `module` section of every payload.
pub const MODULE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root configuration for a [`crate::Client`].
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// API host, with or without scheme (e.g. "account-api.datadome.co").
    pub endpoint: String,

    /// Key sent in the `x-api-key` header. Required.
    pub api_key: String,

    /// Deadline for a single call in milliseconds (must be > 0).
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Configuration with defaults and the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

// The key never shows up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
