use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;

use crate::app_state::AppState;
use crate::domain::{Email, Password, RegisterRequestBody};
use crate::errors::RegisterError;
use crate::services::AuthService;
use crate::views;

pub async fn register_page() -> Html<String> {
    Html(views::register_form())
}

pub async fn register(
    State(state): State<AppState>,
    Form(request): Form<RegisterRequestBody>,
) -> Result<Redirect, RegisterError> {
    let (username, email, password) = match (request.username, request.email, request.password)
    {
        (Some(u), Some(e), Some(p)) if !u.trim().is_empty() && !e.trim().is_empty() => (u, e, p),
        _ => return Err(RegisterError::MissingFields),
    };
    let email = Email::parse(email).or(Err(RegisterError::InvalidEmail))?;
    let password = Password::parse(password).or(Err(RegisterError::MissingFields))?;

    AuthService::register(&state, username.trim().to_owned(), email, password).await?;

    Ok(Redirect::to("/login"))
}
