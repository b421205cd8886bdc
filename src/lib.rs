//! Account Protect client library
//!
//! Fingerprints inbound HTTP requests, reports login, registration, account
//! update and password update events, and turns the API answer into an
//! allow/deny recommendation that fails open.

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod fingerprint;
pub mod models;
pub mod observability;
pub mod transport;

pub use client::{Client, ClientBuilder};
pub use config::schema::ClientConfig;
pub use error::FraudError;
pub use events::{
    AccountUpdateEvent, Action, AnyEvent, Event, LoginEvent, LoginStatus, Operation,
    PasswordUpdateEvent, PasswordUpdateReason, PasswordUpdateStatus, RegistrationEvent,
};
pub use fingerprint::{Header, InboundRequest, RemoteAddr, RequestMetadata, TlsConnection};
pub use models::{ErrorResponsePayload, ResponseAction, ResponsePayload, ResponseStatus};
pub use transport::ValidateOutcome;
