//! Registration event.

use serde::Serialize;

use crate::events::{Action, CommonPayload, Event};
use crate::models::{Authentication, Session, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequestPayload {
    #[serde(flatten)]
    pub common: CommonPayload,
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationEvent {
    pub account: String,
    pub user: User,
    pub session: Option<Session>,
    pub authentication: Option<Authentication>,
}

impl RegistrationEvent {
    pub fn new(account: impl Into<String>, user: User) -> Self {
        Self {
            account: account.into(),
            user,
            session: None,
            authentication: None,
        }
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

impl Event for RegistrationEvent {
    type Payload = RegistrationRequestPayload;

    fn action(&self) -> Action {
        Action::Registration
    }

    fn account(&self) -> &str {
        &self.account
    }

    fn payload(&self, common: CommonPayload) -> RegistrationRequestPayload {
        RegistrationRequestPayload {
            common,
            user: self.user.clone(),
            session: self.session.clone(),
            authentication: self.authentication.clone(),
        }
    }
}
