use auth_contract::MessageBody;
use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("Missing username, email or password")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Email already exists")]
    DuplicateIdentity,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for RegisterError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RegisterError::MissingFields => StatusCode::BAD_REQUEST,
            RegisterError::InvalidEmail => StatusCode::BAD_REQUEST,
            RegisterError::DuplicateIdentity => StatusCode::BAD_REQUEST,
            RegisterError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(MessageBody::new(self.to_string()))).into_response()
    }
}
