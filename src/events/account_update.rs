//! Account update event.

use serde::Serialize;

use crate::events::{Action, CommonPayload, Event};
use crate::models::{Authentication, Session, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountUpdateRequestPayload {
    #[serde(flatten)]
    pub common: CommonPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountUpdateEvent {
    pub account: String,
    pub user: Option<User>,
    pub session: Option<Session>,
    pub authentication: Option<Authentication>,
}

impl AccountUpdateEvent {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
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

impl Event for AccountUpdateEvent {
    type Payload = AccountUpdateRequestPayload;

    fn action(&self) -> Action {
        Action::AccountUpdate
    }

    fn account(&self) -> &str {
        &self.account
    }

    fn payload(&self, common: CommonPayload) -> AccountUpdateRequestPayload {
        AccountUpdateRequestPayload {
            common,
            user: self.user.clone(),
            session: self.session.clone(),
            authentication: self.authentication.clone(),
        }
    }
}
