//! Login event.

use serde::{Deserialize, Serialize};

use crate::events::{Action, CommonPayload, Event};
use crate::models::{Authentication, Session, User};

/// Outcome of the login attempt being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginStatus {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequestPayload {
    #[serde(flatten)]
    pub common: CommonPayload,
    pub status: LoginStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginEvent {
    pub account: String,
    pub status: LoginStatus,
    pub user: Option<User>,
    pub session: Option<Session>,
    pub authentication: Option<Authentication>,
}

impl LoginEvent {
    pub fn new(account: impl Into<String>, status: LoginStatus) -> Self {
        Self {
            account: account.into(),
            status,
            user: None,
            session: None,
            authentication: None,
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }
}

impl Event for LoginEvent {
    type Payload = LoginRequestPayload;

    fn action(&self) -> Action {
        Action::Login
    }

    fn account(&self) -> &str {
        &self.account
    }

    fn payload(&self, common: CommonPayload) -> LoginRequestPayload {
        LoginRequestPayload {
            common,
            status: self.status,
            user: self.user.clone(),
            session: self.session.clone(),
            authentication: self.authentication.clone(),
        }
    }
}
