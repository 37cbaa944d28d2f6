pub mod authenticated_session;
pub mod data_stores;
pub mod email;
pub mod login_request;
pub mod password;
pub mod register_request;
pub mod session_claims;
pub mod session_token;
mod user;

pub use authenticated_session::*;
pub use data_stores::*;
pub use email::*;
pub use login_request::*;
pub use password::*;
pub use register_request::*;
pub use session_claims::*;
pub use session_token::*;
pub use user::*;
