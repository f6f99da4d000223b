use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use jokes_application::RandomJokeUseCase;
use jokes_core::{JokeStore, UserStore};

use super::load_layout;
use crate::{
    error::RouteError,
    state::AppState,
    views::{JokeView, JokesBoundaryPage, Layout, RandomJokePage, render},
};

/// `GET /jokes`: the layout wrapping a random joke.
#[tracing::instrument(name = "Random joke", skip_all)]
pub async fn random_joke<U, J, H>(
    State(state): State<AppState<U, J, H>>,
    jar: CookieJar,
) -> Response
where
    U: UserStore + Clone + 'static,
    J: JokeStore + Clone + 'static,
    H: Clone + Send + Sync + 'static,
{
    let layout =
        match load_layout(&state.user_store, &state.joke_store, &state.sessions, &jar).await {
            Ok(layout) => layout,
            Err(e) => return e.into_response(),
        };

    match show_random_joke(&state.joke_store, &layout).await {
        Ok(response) => response,
        Err(e) => random_joke_boundary(layout, e),
    }
}

async fn show_random_joke<J>(joke_store: &J, layout: &Layout) -> Result<Response, RouteError>
where
    J: JokeStore,
{
    let joke = RandomJokeUseCase::new(joke_store).execute().await?;

    render(
        StatusCode::OK,
        &RandomJokePage {
            layout: layout.clone(),
            joke: JokeView::from(&joke),
        },
    )
}

fn random_joke_boundary(layout: Layout, error: RouteError) -> Response {
    let (status, message) = match error {
        RouteError::Status { status, .. } if status == StatusCode::NOT_FOUND => {
            (status, "There are no jokes to display.")
        }
        RouteError::Status { .. } => return error.into_response(),
        RouteError::Unexpected(ref e) => {
            tracing::error!(error = %e, "Failed to load a random joke");
            (StatusCode::INTERNAL_SERVER_ERROR, "I did a whoopsies.")
        }
    };

    let page = JokesBoundaryPage {
        layout,
        title: "Remix Jokes".to_string(),
        message: message.to_string(),
        login_link: None,
    };

    render(status, &page).unwrap_or_else(IntoResponse::into_response)
}
