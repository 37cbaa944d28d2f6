use auth_contract::extract_token;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;
use crate::domain::CurrentIdentity;
use crate::errors::AuthorityError;

/// Guard for protected operations.
///
/// Hands the caller's token to the identity authority and, on success,
/// stores the returned `IdentityClaims` in the request extensions. The
/// `Authorization` header is removed before the inner handler runs.
pub async fn require_identity(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AuthorityError> {
    let (mut request, token) = extract_token(request).await;

    let Some(token) = token else {
        log::warn!("Token is missing in request to {}", request.uri().path());
        return Err(AuthorityError::MissingToken);
    };
    log::info!("Token from {}: {}...", token.source, token.prefix());

    let claims = state.verifier.verify(&token.value).await?;

    request.headers_mut().remove(AUTHORIZATION);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Like `require_identity`, but any failure leaves the caller anonymous.
pub async fn optional_identity(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut request, token) = extract_token(request).await;

    let identity = match token {
        Some(token) => match state.verifier.verify(&token.value).await {
            Ok(claims) => Some(claims),
            Err(e) => {
                log::debug!("Ignoring token {}...: {}", token.prefix(), e);
                None
            }
        },
        None => None,
    };

    request.headers_mut().remove(AUTHORIZATION);
    request.extensions_mut().insert(CurrentIdentity(identity));
    next.run(request).await
}
