use auth_contract::{IdentityClaims, TokenRejection, VerifyTokenRequestBody};
use axum::extract::State;
use axum::Json;

use crate::{app_state::AppState, errors::VerifyTokenError, services::AuthService};

pub async fn verify_token(
    State(state): State<AppState>,
    request: Option<Json<VerifyTokenRequestBody>>,
) -> Result<Json<IdentityClaims>, VerifyTokenError> {
    let token = request
        .and_then(|Json(body)| body.token)
        .ok_or(TokenRejection::Missing)?;

    let claims = AuthService::verify_token(&state, &token).await?;
    Ok(Json(claims))
}
