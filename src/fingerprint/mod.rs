//! Request fingerprinting subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request (axum Request / Parts)
//!     → request.rs (InboundRequest: headers, peer address, TLS, cookies)
//!     → builder.rs (derive ~27 fields, apply RequestMetadata overrides)
//!     → truncation.rs (bound every string field)
//!     → Header (immutable snapshot, serialized with every call)
//! ```
//!
//! # Design Decisions
//! - Building is pure: same request + overrides gives the same Header
//! - Overrides replace derived values before truncation
//! - Optional client-hint fields are omitted when empty, never sent as ""

pub mod builder;
pub mod header;
pub mod request;
pub mod truncation;

pub use builder::build_header;
pub use header::{Header, RequestMetadata};
pub use request::{InboundRequest, RemoteAddr, TlsConnection};
pub use truncation::{truncate, truncate_optional, ApiField};
