use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use jokes_adapters::session::SessionManager;
use jokes_application::{DeleteJokeUseCase, ShowJokeUseCase};
use jokes_core::{JokeId, JokeStore, UserStore};
use serde::Deserialize;

use super::load_layout;
use crate::{
    error::RouteError,
    session,
    state::AppState,
    views::{JokePage, JokeView, JokesBoundaryPage, Layout, render},
};

#[derive(Debug, Default, Deserialize)]
pub struct JokeActionForm {
    #[serde(rename = "_method")]
    pub method: Option<String>,
}

/// `GET /jokes/{id}`
#[tracing::instrument(name = "Show joke", skip(state, jar))]
pub async fn joke<U, J, H>(
    State(state): State<AppState<U, J, H>>,
    Path(id): Path<String>,
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

    match show_joke(&state.joke_store, &state.sessions, &jar, &id, &layout).await {
        Ok(response) => response,
        Err(e) => joke_boundary(layout, &id, e),
    }
}

async fn show_joke<J>(
    joke_store: &J,
    sessions: &SessionManager,
    jar: &CookieJar,
    id: &str,
    layout: &Layout,
) -> Result<Response, RouteError>
where
    J: JokeStore,
{
    let not_found = || RouteError::status(StatusCode::NOT_FOUND, "What a joke! Not found.");

    let joke_id = JokeId::parse(id).map_err(|_| not_found())?;
    let user_id = session::get_user_id(sessions, jar);

    let detail = ShowJokeUseCase::new(joke_store)
        .execute(joke_id, user_id)
        .await?
        .ok_or_else(not_found)?;

    render(
        StatusCode::OK,
        &JokePage {
            layout: layout.clone(),
            joke: JokeView::from(&detail.joke),
            is_owner: detail.is_owner,
        },
    )
}

/// `POST /jokes/{id}`: deletes the joke when the form carries `_method=delete`.
#[tracing::instrument(name = "Delete joke", skip(state, jar, form))]
pub async fn delete_joke<U, J, H>(
    State(state): State<AppState<U, J, H>>,
    Path(id): Path<String>,
    jar: CookieJar,
    form: Result<Form<JokeActionForm>, FormRejection>,
) -> Response
where
    U: UserStore + Clone + 'static,
    J: JokeStore + Clone + 'static,
    H: Clone + Send + Sync + 'static,
{
    // An unreadable body carries no method override.
    let form = form.map(|Form(form)| form).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable joke action form");
        JokeActionForm::default()
    });

    let error = match remove_joke(&state.joke_store, &state.sessions, &jar, &id, form).await {
        Ok(response) => return response,
        Err(e) => e,
    };

    match load_layout(&state.user_store, &state.joke_store, &state.sessions, &jar).await {
        Ok(layout) => joke_boundary(layout, &id, error),
        Err(e) => e.into_response(),
    }
}

async fn remove_joke<J>(
    joke_store: &J,
    sessions: &SessionManager,
    jar: &CookieJar,
    id: &str,
    form: JokeActionForm,
) -> Result<Response, RouteError>
where
    J: JokeStore,
{
    if form.method.as_deref() != Some("delete") {
        return Err(RouteError::status(
            StatusCode::BAD_REQUEST,
            format!("The _method {} is not supported", form.method.unwrap_or_default()),
        ));
    }

    let joke_id = JokeId::parse(id).map_err(|_| {
        RouteError::status(StatusCode::NOT_FOUND, "Can't delete what does not exist")
    })?;

    let use_case = DeleteJokeUseCase::new(joke_store);
    use_case.ensure_exists(joke_id).await?;

    let user_id = session::require_user_id(sessions, jar)?;
    use_case.execute(joke_id, user_id).await?;

    tracing::info!(%joke_id, %user_id, "Joke deleted");
    Ok(Redirect::to("/jokes").into_response())
}

fn joke_boundary(layout: Layout, id: &str, error: RouteError) -> Response {
    let (status, message) = match error {
        RouteError::Status { status, .. } if status == StatusCode::BAD_REQUEST => {
            (status, "What you're trying to do is not allowed.".to_string())
        }
        RouteError::Status { status, .. } if status == StatusCode::UNAUTHORIZED => {
            (status, format!("Sorry, but {id} is not your joke."))
        }
        RouteError::Status { status, .. } if status == StatusCode::NOT_FOUND => {
            (status, format!("Huh? What the heck is {id}?"))
        }
        RouteError::Status { .. } => return error.into_response(),
        RouteError::Unexpected(ref e) => {
            tracing::error!(error = %e, joke_id = %id, "Failed to handle joke");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("There was an error loading joke by the id {id}. Sorry."),
            )
        }
    };

    let page = JokesBoundaryPage {
        layout,
        title: "No joke".to_string(),
        message,
        login_link: None,
    };

    render(status, &page).unwrap_or_else(IntoResponse::into_response)
}
