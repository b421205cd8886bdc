//! Wire types shared by every event and response.

pub mod module;
pub mod response;
pub mod user;

pub use module::Module;
pub use response::{
    ErrorInfo, ErrorResponsePayload, Location, ResponseAction, ResponsePayload, ResponseStatus,
};
pub use user::{
    Address, Authentication, AuthenticationMode, AuthenticationSocialProvider, AuthenticationType,
    Session, User,
};
