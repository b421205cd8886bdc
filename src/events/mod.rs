//! Protected actions and the two-phase validate/collect protocol.
//!
//! # Data Flow
//! ```text
//! LoginEvent / RegistrationEvent / AccountUpdateEvent / PasswordUpdateEvent
//!     → Event::payload (common fields + action-specific fields)
//!     → transport::dispatch (POST /v1/{operation}/{action})
//!     → transport::normalize (validate) or error shape only (collect)
//! ```
//!
//! # Design Decisions
//! - Optional enrichments are `Option` fields omitted from the JSON when absent
//! - Builders are last-write-wins per field; nothing is merged
//! - New event types only implement `action`, `account` and `payload`

pub mod account_update;
pub mod any;
pub mod login;
pub mod password_update;
pub mod registration;

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::{FraudError, Result};
use crate::fingerprint::Header;
use crate::models::{ErrorResponsePayload, Module};
use crate::transport::{self, ValidateOutcome};

pub use account_update::{AccountUpdateEvent, AccountUpdateRequestPayload};
pub use any::{AnyEvent, AnyPayload};
pub use login::{LoginEvent, LoginRequestPayload, LoginStatus};
pub use password_update::{
    PasswordUpdateEvent, PasswordUpdateReason, PasswordUpdateRequestPayload, PasswordUpdateStatus,
};
pub use registration::{RegistrationEvent, RegistrationRequestPayload};

/// The user flow being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Login,
    Registration,
    AccountUpdate,
    PasswordUpdate,
}

impl Action {
    /// Path segment(s) of the action in the API URL.
    pub fn path(self) -> &'static str {
        match self {
            Action::Login => "login",
            Action::Registration => "registration",
            Action::AccountUpdate => "account/update",
            Action::PasswordUpdate => "password/update",
        }
    }

    /// Snake-case name used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Login => "login",
            Action::Registration => "registration",
            Action::AccountUpdate => "account_update",
            Action::PasswordUpdate => "password_update",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision-seeking validate or fire-and-forget collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Validate,
    Collect,
}

impl Operation {
    /// Path segment of the operation in the API URL.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Validate => "validate",
            Operation::Collect => "collect",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields present in every payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonPayload {
    pub account: String,
    pub header: Header,
    pub module: Module,
}

/// A protected action that can be validated or collected.
pub trait Event: Send + Sync {
    /// Body sent to the API for this event.
    type Payload: Serialize + Send + Sync;

    fn action(&self) -> Action;

    fn account(&self) -> &str;

    /// Assemble the action-specific body around the common fields.
    fn payload(&self, common: CommonPayload) -> Self::Payload;

    fn common(&self, module: Module, header: Header) -> CommonPayload {
        CommonPayload {
            account: self.account().to_string(),
            header,
            module,
        }
    }

    /// Ask the API for a recommendation.
    ///
    /// Transport failures yield a fail-open response together with the error.
    /// Only a payload that cannot be encoded is returned as `Err`.
    fn validate(
        &self,
        client: &Client,
        module: Module,
        header: Header,
    ) -> impl Future<Output = Result<ValidateOutcome>> + Send {
        async move {
            let payload = self.payload(self.common(module, header));
            let raw = transport::dispatch(client, Operation::Validate, self.action(), &payload).await;
            if let Err(FraudError::Serialization(e)) = raw {
                return Err(FraudError::Serialization(e));
            }
            Ok(transport::normalize(raw))
        }
    }

    /// Report the event for enrichment only.
    ///
    /// Returns the decoded error shape on a non-2xx answer, nothing otherwise.
    fn collect(
        &self,
        client: &Client,
        module: Module,
        header: Header,
    ) -> impl Future<Output = Result<Option<ErrorResponsePayload>>> + Send {
        async move {
            let payload = self.payload(self.common(module, header));
            let raw = transport::dispatch(client, Operation::Collect, self.action(), &payload).await?;
            if raw.is_success() {
                return Ok(None);
            }
            Ok(Some(transport::decode_error_shape(&raw.body).unwrap_or_default()))
        }
    }
}
