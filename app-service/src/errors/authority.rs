use auth_contract::MessageBody;
use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

/// Outcome of delegating a token check to the identity authority.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthorityError {
    #[error("Token is missing")]
    MissingToken,

    /// The authority answered with something other than 200; its status and
    /// message are passed through untouched.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Failed to verify token")]
    VerificationUnavailable,
}

impl IntoResponse for AuthorityError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AuthorityError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthorityError::Rejected { status, .. } => *status,
            AuthorityError::VerificationUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(MessageBody::new(self.to_string()))).into_response()
    }
}
