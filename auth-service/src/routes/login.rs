use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;

use crate::app_state::AppState;
use crate::domain::{Email, LoginRequestBody, Password};
use crate::errors::LoginError;
use crate::services::AuthService;
use crate::views;

pub async fn login_page() -> Html<String> {
    Html(views::login_form())
}

pub async fn login(
    State(state): State<AppState>,
    Form(request): Form<LoginRequestBody>,
) -> Result<Redirect, LoginError> {
    let (email, password) = match (request.email, request.password) {
        (Some(e), Some(p)) if !e.trim().is_empty() && !p.is_empty() => (e, p),
        _ => return Err(LoginError::MissingFields),
    };
    // a malformed address can't match any record
    let email = Email::parse(email).or(Err(LoginError::InvalidCredentials))?;
    let password = Password::parse(password).or(Err(LoginError::MissingFields))?;

    let token = AuthService::login(&state, &email, &password).await?;

    // JWTs are URL-safe, so the token goes into the query string as is.
    Ok(Redirect::to(&format!("/user?token={}", token.as_ref())))
}
