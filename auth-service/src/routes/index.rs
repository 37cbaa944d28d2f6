use axum::extract::State;
use axum::response::Html;
use axum::Extension;

use crate::app_state::AppState;
use crate::domain::CurrentSession;
use crate::views;

pub async fn index(
    State(state): State<AppState>,
    Extension(CurrentSession(session)): Extension<CurrentSession>,
) -> Html<String> {
    let identity = session
        .as_ref()
        .map(|s| (&s.claims, s.token.value.as_str()));
    Html(views::home(identity, state.config.app_service_url()))
}
