//! Outbound calls to the Account Protect API.
//!
//! # Data Flow
//! ```text
//! event payload
//!     → dispatch.rs (JSON encode, POST with api key, deadline, full body read)
//!     → RawResponse (status code + body) or FraudError
//!     → normalize.rs (fail-open mapping to one ResponsePayload)
//! ```
//!
//! # Design Decisions
//! - At most one attempt per call; no retries at any layer
//! - Timeout is a distinct error so the response can say "timeout"
//! - The response body is always consumed or dropped before returning

pub mod dispatch;
pub mod normalize;

pub use dispatch::{dispatch, RawResponse};
pub use normalize::{decode_error_shape, normalize, ValidateOutcome};
