mod login;
mod register;
mod session_guard;
mod verify_token;

pub use login::*;
pub use register::*;
pub use session_guard::*;
pub use verify_token::*;
