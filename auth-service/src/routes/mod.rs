pub(crate) mod index;
pub(crate) mod login;
pub(crate) mod register;
pub(crate) mod user;
pub(crate) mod verify_token;

// re-export items from sub-modules
pub use index::*;
pub use login::*;
pub use register::*;
pub use user::*;
pub use verify_token::*;
