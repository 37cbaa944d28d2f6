use auth_contract::{ErrorBody, TokenRejection};
use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use super::VerifyTokenError;

/// Rejection from the session guard on pages such as `/user`.
///
/// Same reasons as `/verify-token`, but answered as `403 {"error": ...}`.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct SessionGuardError(#[from] VerifyTokenError);

impl From<TokenRejection> for SessionGuardError {
    fn from(rejection: TokenRejection) -> Self {
        SessionGuardError(VerifyTokenError::Rejected(rejection))
    }
}

impl IntoResponse for SessionGuardError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0 {
            VerifyTokenError::Rejected(_) => StatusCode::FORBIDDEN,
            VerifyTokenError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
