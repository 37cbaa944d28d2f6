use axum::extract::State;
use axum::response::Html;
use axum::Extension;

use crate::app_state::AppState;
use crate::domain::CurrentIdentity;
use crate::views;

pub async fn index(
    State(state): State<AppState>,
    Extension(CurrentIdentity(identity)): Extension<CurrentIdentity>,
) -> Html<String> {
    Html(views::home(identity.as_ref(), state.config.auth_service_url()))
}
