//! Identification of the SDK instance sending a payload.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Name, version and send time of the calling library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub request_time_micros: i64,
    pub name: String,
    pub version: String,
}

impl Module {
    /// Stamp a module with the current time in microseconds since the epoch.
    pub fn now(name: &str, version: &str) -> Self {
        let request_time_micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as i64)
            .unwrap_or_default();
        Self {
            request_time_micros,
            name: name.to_string(),
            version: version.to_string(),
        }
    }
}
