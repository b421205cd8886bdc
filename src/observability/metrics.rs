//! Metrics for calls to the Account Protect API.
//!
//! # Metrics
//! - `fraud_api_requests_total` (counter): calls by action, operation, outcome
//! - `fraud_api_request_duration_seconds` (histogram): call latency
//!
//! Outcome is the HTTP status code, `timeout` or `error`.

use std::time::Instant;

use crate::events::{Action, Operation};

pub const REQUESTS_TOTAL: &str = "fraud_api_requests_total";
pub const REQUEST_DURATION: &str = "fraud_api_request_duration_seconds";

/// Record one finished call.
pub fn record_call(operation: Operation, action: Action, outcome: &str, start: Instant) {
    let duration = start.elapsed().as_secs_f64();

    metrics::counter!(
        REQUESTS_TOTAL,
        "operation" => operation.as_str(),
        "action" => action.as_str(),
        "outcome" => outcome.to_string()
    )
    .increment(1);

    metrics::histogram!(
        REQUEST_DURATION,
        "operation" => operation.as_str(),
        "action" => action.as_str()
    )
    .record(duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_recorder() {
        // No global recorder installed: recording is a no-op.
        record_call(Operation::Validate, Action::Login, "200", Instant::now());
        record_call(Operation::Collect, Action::PasswordUpdate, "timeout", Instant::now());
    }
}
