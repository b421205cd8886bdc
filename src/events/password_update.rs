//! Password update event.

use serde::{Deserialize, Serialize};

use crate::events::{Action, CommonPayload, Event};
use crate::models::{Session, User};

/// Why the password is being changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordUpdateReason {
    ForgotPassword,
    ForcedReset,
    UserUpdate,
}

/// Progress of the password change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordUpdateStatus {
    Attempted,
    Failed,
    LinkExpired,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordUpdateRequestPayload {
    #[serde(flatten)]
    pub common: CommonPayload,
    pub reason: PasswordUpdateReason,
    pub status: PasswordUpdateStatus,
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordUpdateEvent {
    pub account: String,
    pub user: User,
    pub reason: PasswordUpdateReason,
    pub status: PasswordUpdateStatus,
    pub session: Option<Session>,
}

impl PasswordUpdateEvent {
    pub fn new(
        account: impl Into<String>,
        user: User,
        reason: PasswordUpdateReason,
        status: PasswordUpdateStatus,
    ) -> Self {
        Self {
            account: account.into(),
            user,
            reason,
            status,
            session: None,
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }
}

impl Event for PasswordUpdateEvent {
    type Payload = PasswordUpdateRequestPayload;

    fn action(&self) -> Action {
        Action::PasswordUpdate
    }

    fn account(&self) -> &str {
        &self.account
    }

    fn payload(&self, common: CommonPayload) -> PasswordUpdateRequestPayload {
        PasswordUpdateRequestPayload {
            common,
            reason: self.reason,
            status: self.status,
            user: self.user.clone(),
            session: self.session.clone(),
        }
    }
}
