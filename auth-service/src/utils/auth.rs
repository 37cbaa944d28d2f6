use auth_contract::{extract_token, TokenRejection};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;
use crate::domain::{AuthenticatedSession, CurrentSession};
use crate::errors::SessionGuardError;
use crate::services::AuthService;

/// Guard for pages that need a session.
///
/// Resolves the caller's token locally and stores an `AuthenticatedSession`
/// in the request extensions, or answers `403` without calling `next`.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, SessionGuardError> {
    let (mut request, token) = extract_token(request).await;

    let Some(token) = token else {
        log::warn!("Token is missing in request to {}", request.uri().path());
        return Err(TokenRejection::Missing.into());
    };
    log::info!("Token from {}: {}...", token.source, token.prefix());

    let claims = AuthService::verify_token(&state, &token.value).await?;
    request
        .extensions_mut()
        .insert(AuthenticatedSession { claims, token });

    Ok(next.run(request).await)
}

/// Like `require_session`, but any failure just leaves the caller anonymous.
pub async fn optional_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut request, token) = extract_token(request).await;

    let session = match token {
        Some(token) => match AuthService::verify_token(&state, &token.value).await {
            Ok(claims) => Some(AuthenticatedSession { claims, token }),
            Err(e) => {
                log::debug!("Ignoring token {}...: {}", token.prefix(), e);
                None
            }
        },
        None => None,
    };

    request.extensions_mut().insert(CurrentSession(session));
    next.run(request).await
}
