use axum::extract::State;
use axum::http::header::ACCEPT;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use axum::{Extension, Json};

use crate::app_state::AppState;
use crate::domain::AuthenticatedSession;
use crate::views;

pub async fn user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Extension(session): Extension<AuthenticatedSession>,
) -> Response {
    if wants_json(&headers) {
        return Json(session.claims).into_response();
    }
    Html(views::user(
        &session.claims,
        &session.token.value,
        state.config.app_service_url(),
    ))
    .into_response()
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}
