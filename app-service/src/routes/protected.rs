use auth_contract::IdentityClaims;
use axum::http::header::ACCEPT;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use axum::{Extension, Json};

use crate::views;

pub async fn protected(
    headers: HeaderMap,
    Extension(claims): Extension<IdentityClaims>,
) -> Response {
    log::info!("Serving protected resource to user {}", claims.user_id);

    if wants_json(&headers) {
        return Json(claims).into_response();
    }
    Html(views::protected(&claims)).into_response()
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}
