//! Single POST to the API, classified into body, timeout or transport error.

use std::time::Instant;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::client::Client;
use crate::error::{FraudError, Result};
use crate::events::{Action, Operation};
use crate::observability::metrics;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Status code and fully read body of an API answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Encode `payload` and POST it to `{endpoint}/v1/{operation}/{action}`.
///
/// The deadline covers sending the request and reading the whole body.
/// Dropping the returned future aborts the call.
pub async fn dispatch<P>(
    client: &Client,
    operation: Operation,
    action: Action,
    payload: &P,
) -> Result<RawResponse>
where
    P: Serialize + ?Sized,
{
    let body = serde_json::to_vec(payload).map_err(FraudError::Serialization)?;
    let url = client.url_for(operation, action);
    let start = Instant::now();

    tracing::debug!(
        operation = %operation,
        action = %action,
        url = %url,
        bytes = body.len(),
        "Sending request to Account Protect API"
    );

    let request = client
        .http()
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .header(API_KEY_HEADER, client.api_key_header().clone())
        .body(body);

    let exchange = async {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok::<_, reqwest::Error>(RawResponse {
            status,
            body: body.to_vec(),
        })
    };

    let result = match tokio::time::timeout(client.timeout(), exchange).await {
        Ok(Ok(raw)) => Ok(raw),
        Ok(Err(e)) if e.is_timeout() => Err(FraudError::Timeout),
        Ok(Err(e)) => Err(FraudError::Transport(e)),
        Err(_) => Err(FraudError::Timeout),
    };

    match &result {
        Ok(raw) => {
            tracing::debug!(
                operation = %operation,
                action = %action,
                status = raw.status,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Account Protect API answered"
            );
            metrics::record_call(operation, action, &raw.status.to_string(), start);
        }
        Err(FraudError::Timeout) => {
            tracing::warn!(
                operation = %operation,
                action = %action,
                timeout_ms = client.timeout().as_millis() as u64,
                "Account Protect API call timed out"
            );
            metrics::record_call(operation, action, "timeout", start);
        }
        Err(e) => {
            tracing::warn!(operation = %operation, action = %action, error = %e, "Account Protect API call failed");
            metrics::record_call(operation, action, "error", start);
        }
    }

    result
}
