//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! transport::dispatch produces:
//!     → tracing events (debug per call, warn on timeout / failure)
//!     → metrics.rs (call counter + latency histogram)
//!
//! Consumers:
//!     → whatever tracing subscriber the host installs (logging.rs helps)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a global subscriber or recorder on its own
//! - The API key is never logged

pub mod logging;
pub mod metrics;
