use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use jokes_application::CreateJokeUseCase;
use jokes_core::{
    JokeContent, JokeName, JokeStore, UserStore, validate_joke_content, validate_joke_name,
};
use serde::Deserialize;

use super::load_layout;
use crate::{
    error::RouteError,
    session,
    state::AppState,
    views::{JokeFieldErrors, JokeFields, JokesBoundaryPage, Layout, NewJokePage, render},
};

#[derive(Debug, Deserialize)]
pub struct NewJokeForm {
    pub name: Option<String>,
    pub content: Option<String>,
}

/// `GET /jokes/new`
#[tracing::instrument(name = "New joke form", skip_all)]
pub async fn new_joke<U, J, H>(State(state): State<AppState<U, J, H>>, jar: CookieJar) -> Response
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

    let page = match session::require_user_id(&state.sessions, &jar) {
        Ok(_) => NewJokePage {
            layout: layout.clone(),
            fields: JokeFields::default(),
            field_errors: JokeFieldErrors::default(),
            form_error: None,
        },
        Err(e) => return new_joke_boundary(layout, e.into()),
    };

    match render(StatusCode::OK, &page) {
        Ok(response) => response,
        Err(e) => new_joke_boundary(layout, e),
    }
}

/// `POST /jokes/new`
#[tracing::instrument(name = "Create joke", skip_all)]
pub async fn create_joke<U, J, H>(
    State(state): State<AppState<U, J, H>>,
    jar: CookieJar,
    Form(form): Form<NewJokeForm>,
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

    match submit_joke(&state, &jar, form, &layout).await {
        Ok(response) => response,
        Err(e) => new_joke_boundary(layout, e),
    }
}

async fn submit_joke<U, J, H>(
    state: &AppState<U, J, H>,
    jar: &CookieJar,
    form: NewJokeForm,
    layout: &Layout,
) -> Result<Response, RouteError>
where
    U: UserStore,
    J: JokeStore,
{
    let user_id = session::require_user_id(&state.sessions, jar)?;

    let (Some(name), Some(content)) = (form.name, form.content) else {
        return render(
            StatusCode::BAD_REQUEST,
            &NewJokePage {
                layout: layout.clone(),
                fields: JokeFields::default(),
                field_errors: JokeFieldErrors::default(),
                form_error: Some("Form not submitted correctly.".to_string()),
            },
        );
    };

    let field_errors = JokeFieldErrors {
        name: validate_joke_name(&name),
        content: validate_joke_content(&content),
    };
    if field_errors.any() {
        return render(
            StatusCode::BAD_REQUEST,
            &NewJokePage {
                layout: layout.clone(),
                fields: JokeFields { name, content },
                field_errors,
                form_error: None,
            },
        );
    }

    let name = JokeName::try_from(name).map_err(RouteError::unexpected)?;
    let content = JokeContent::try_from(content).map_err(RouteError::unexpected)?;

    let joke = CreateJokeUseCase::new(&state.user_store, &state.joke_store)
        .execute(user_id, name, content)
        .await?;

    tracing::info!(joke_id = %joke.id, %user_id, "Joke created");
    Ok(Redirect::to(&format!("/jokes/{}", joke.id)).into_response())
}

fn new_joke_boundary(layout: Layout, error: RouteError) -> Response {
    let (status, message, login_link) = match error {
        RouteError::Status { status, .. } if status == StatusCode::UNAUTHORIZED => (
            status,
            "You must be logged in to create a joke.",
            Some("/login?redirectTo=/jokes/new".to_string()),
        ),
        RouteError::Status { .. } => return error.into_response(),
        RouteError::Unexpected(ref e) => {
            tracing::error!(error = %e, "Failed to create joke");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something unexpected went wrong. Sorry about that.",
                None,
            )
        }
    };

    let page = JokesBoundaryPage {
        layout,
        title: "Remix Jokes".to_string(),
        message: message.to_string(),
        login_link,
    };

    render(status, &page).unwrap_or_else(IntoResponse::into_response)
}
