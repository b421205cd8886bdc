//! Closed union over the built-in events.
//!
//! Useful when events of different kinds travel through one queue or
//! channel before being reported.

use serde::Serialize;

use crate::events::{
    AccountUpdateEvent, AccountUpdateRequestPayload, Action, CommonPayload, Event, LoginEvent,
    LoginRequestPayload, PasswordUpdateEvent, PasswordUpdateRequestPayload, RegistrationEvent,
    RegistrationRequestPayload,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyEvent {
    Login(LoginEvent),
    Registration(RegistrationEvent),
    AccountUpdate(AccountUpdateEvent),
    PasswordUpdate(PasswordUpdateEvent),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyPayload {
    Login(LoginRequestPayload),
    Registration(RegistrationRequestPayload),
    AccountUpdate(AccountUpdateRequestPayload),
    PasswordUpdate(PasswordUpdateRequestPayload),
}

impl Event for AnyEvent {
    type Payload = AnyPayload;

    fn action(&self) -> Action {
        match self {
            AnyEvent::Login(e) => e.action(),
            AnyEvent::Registration(e) => e.action(),
            AnyEvent::AccountUpdate(e) => e.action(),
            AnyEvent::PasswordUpdate(e) => e.action(),
        }
    }

    fn account(&self) -> &str {
        match self {
            AnyEvent::Login(e) => e.account(),
            AnyEvent::Registration(e) => e.account(),
            AnyEvent::AccountUpdate(e) => e.account(),
            AnyEvent::PasswordUpdate(e) => e.account(),
        }
    }

    fn payload(&self, common: CommonPayload) -> AnyPayload {
        match self {
            AnyEvent::Login(e) => AnyPayload::Login(e.payload(common)),
            AnyEvent::Registration(e) => AnyPayload::Registration(e.payload(common)),
            AnyEvent::AccountUpdate(e) => AnyPayload::AccountUpdate(e.payload(common)),
            AnyEvent::PasswordUpdate(e) => AnyPayload::PasswordUpdate(e.payload(common)),
        }
    }
}

impl From<LoginEvent> for AnyEvent {
    fn from(event: LoginEvent) -> Self {
        AnyEvent::Login(event)
    }
}

impl From<RegistrationEvent> for AnyEvent {
    fn from(event: RegistrationEvent) -> Self {
        AnyEvent::Registration(event)
    }
}

impl From<AccountUpdateEvent> for AnyEvent {
    fn from(event: AccountUpdateEvent) -> Self {
        AnyEvent::AccountUpdate(event)
    }
}

impl From<PasswordUpdateEvent> for AnyEvent {
    fn from(event: PasswordUpdateEvent) -> Self {
        AnyEvent::PasswordUpdate(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::LoginStatus;
    use crate::fingerprint::Header;
    use crate::models::{Module, User};

    #[test]
    fn test_union_delegates_to_variant() {
        let event: AnyEvent = RegistrationEvent::new("acc", User::new("u1")).into();
        assert_eq!(event.action(), Action::Registration);
        assert_eq!(event.account(), "acc");

        let login: AnyEvent = LoginEvent::new("acc", LoginStatus::Succeeded).into();
        let json = serde_json::to_value(login.payload(CommonPayload {
            account: "acc".into(),
            header: Header::default(),
            module: Module::now("sdk", "1.0.0"),
        }))
        .unwrap();
        // untagged: same body as the concrete event
        assert_eq!(json["status"], "succeeded");
        assert_eq!(json["account"], "acc");
    }
}
