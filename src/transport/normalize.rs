//! Fail-open mapping of a dispatch outcome to a single response.
//!
//! | outcome                  | status  | action                         |
//! |--------------------------|---------|--------------------------------|
//! | timeout                  | timeout | allow (error surfaced)         |
//! | other transport error    | failure | allow (error surfaced)         |
//! | 2xx, decodable           | ok      | from body                      |
//! | 2xx, undecodable         | failure | allow (decode error surfaced)  |
//! | non-2xx                  | failure | allow + decoded error details  |

use crate::error::{FraudError, Result};
use crate::models::{ErrorResponsePayload, ResponsePayload, ResponseStatus};
use crate::transport::dispatch::RawResponse;

/// Result of a validate call: always a usable response, plus the error
/// that forced a fail-open answer, if any.
#[derive(Debug)]
pub struct ValidateOutcome {
    pub response: ResponsePayload,
    pub error: Option<FraudError>,
}

impl ValidateOutcome {
    fn clean(response: ResponsePayload) -> Self {
        Self {
            response,
            error: None,
        }
    }

    fn fail_open(status: ResponseStatus, error: FraudError) -> Self {
        Self {
            response: ResponsePayload::fail_open(status),
            error: Some(error),
        }
    }

    /// Drop the dual signal and keep only the error, if there was one.
    pub fn into_result(self) -> Result<ResponsePayload> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.response),
        }
    }
}

/// Map a dispatch outcome to a response.
pub fn normalize(outcome: Result<RawResponse>) -> ValidateOutcome {
    let raw = match outcome {
        Ok(raw) => raw,
        Err(FraudError::Timeout) => {
            return ValidateOutcome::fail_open(ResponseStatus::Timeout, FraudError::Timeout)
        }
        Err(e) => return ValidateOutcome::fail_open(ResponseStatus::Failure, e),
    };

    if !raw.is_success() {
        let mut response = ResponsePayload::fail_open(ResponseStatus::Failure);
        match decode_error_shape(&raw.body) {
            Ok(error) => response.error = error,
            Err(e) => {
                tracing::warn!(status = raw.status, error = %e, "Undecodable error response from Account Protect API");
            }
        }
        return ValidateOutcome::clean(response);
    }

    match serde_json::from_slice::<ResponsePayload>(&raw.body) {
        Ok(mut response) => {
            response.status = ResponseStatus::Ok;
            ValidateOutcome::clean(response)
        }
        Err(e) => ValidateOutcome::fail_open(ResponseStatus::Failure, FraudError::Decode(e)),
    }
}

/// Decode the error shape of a non-2xx body.
pub fn decode_error_shape(body: &[u8]) -> Result<ErrorResponsePayload> {
    serde_json::from_slice(body).map_err(FraudError::Decode)
}
