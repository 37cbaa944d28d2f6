//! Wire contract shared by the identity authority (`auth-service`) and the
//! services that delegate token verification to it (`app-service`).

pub mod html;
pub mod identity_claims;
pub mod message;
pub mod token_extraction;
pub mod token_rejection;
pub mod verify_token_request;

pub use html::*;
pub use identity_claims::*;
pub use message::*;
pub use token_extraction::*;
pub use token_rejection::*;
pub use verify_token_request::*;
