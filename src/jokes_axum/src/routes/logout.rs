use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{session, state::AppState};

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<U, J, H>(State(state): State<AppState<U, J, H>>, jar: CookieJar) -> Response
where
    U: Clone + Send + Sync + 'static,
    J: Clone + Send + Sync + 'static,
    H: Clone + Send + Sync + 'static,
{
    session::destroy_session(&state.sessions, jar)
}

/// Nothing to render on `GET /logout`.
pub async fn logout_page() -> impl IntoResponse {
    Redirect::to("/")
}
