use auth_contract::{MessageBody, TokenRejection};
use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum VerifyTokenError {
    #[error(transparent)]
    Rejected(#[from] TokenRejection),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for VerifyTokenError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            VerifyTokenError::Rejected(_) => StatusCode::UNAUTHORIZED,
            VerifyTokenError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(MessageBody::new(self.to_string()))).into_response()
    }
}
