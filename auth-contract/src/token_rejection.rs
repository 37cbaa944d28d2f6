use thiserror::Error;

/// Reasons a presented session token is refused.
///
/// The display strings are part of the wire contract: they are sent as the
/// `message` / `error` field of rejection bodies and relayed verbatim by
/// delegating services.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    #[error("Token is missing")]
    Missing,

    #[error("Token is expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,
}
