use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use jokes_adapters::session::SessionError;
use jokes_application::{
    CreateJokeError, DeleteJokeError, LoginError, RandomJokeError, RegisterError,
};
use jokes_core::{JokeStoreError, UserStoreError};
use thiserror::Error;

use crate::views::ErrorPage;

/// What a route hands back to its page boundary instead of a rendered page.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A response with a known status the page may render in context.
    #[error("{status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl RouteError {
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn unexpected(error: impl ToString) -> Self {
        Self::Unexpected(error.to_string())
    }
}

impl From<askama::Error> for RouteError {
    fn from(e: askama::Error) -> Self {
        Self::unexpected(e)
    }
}

impl From<SessionError> for RouteError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Unauthorized => Self::status(StatusCode::UNAUTHORIZED, "Unauthorized"),
            e => Self::unexpected(e),
        }
    }
}

impl From<UserStoreError> for RouteError {
    fn from(e: UserStoreError) -> Self {
        Self::unexpected(e)
    }
}

impl From<JokeStoreError> for RouteError {
    fn from(e: JokeStoreError) -> Self {
        match e {
            JokeStoreError::JokeNotFound => {
                Self::status(StatusCode::NOT_FOUND, "What a joke! Not found.")
            }
            e => Self::unexpected(e),
        }
    }
}

impl From<LoginError> for RouteError {
    fn from(e: LoginError) -> Self {
        Self::unexpected(e)
    }
}

impl From<RegisterError> for RouteError {
    fn from(e: RegisterError) -> Self {
        match e {
            RegisterError::UsernameTaken(_) => Self::status(StatusCode::BAD_REQUEST, e.to_string()),
            e => Self::unexpected(e),
        }
    }
}

impl From<RandomJokeError> for RouteError {
    fn from(e: RandomJokeError) -> Self {
        match e {
            RandomJokeError::NoJokes => Self::status(StatusCode::NOT_FOUND, e.to_string()),
            RandomJokeError::JokeStoreError(e) => e.into(),
        }
    }
}

impl From<CreateJokeError> for RouteError {
    fn from(e: CreateJokeError) -> Self {
        match e {
            CreateJokeError::UnknownJokester(_) => {
                Self::status(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            e => Self::unexpected(e),
        }
    }
}

impl From<DeleteJokeError> for RouteError {
    fn from(e: DeleteJokeError) -> Self {
        match e {
            DeleteJokeError::JokeNotFound => Self::status(StatusCode::NOT_FOUND, e.to_string()),
            DeleteJokeError::NotOwner => Self::status(StatusCode::UNAUTHORIZED, e.to_string()),
            DeleteJokeError::JokeStoreError(e) => Self::unexpected(e),
        }
    }
}

/// The root boundary: every error no page claimed ends up here.
impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let (status, page) = match self {
            RouteError::Status { status, message } => {
                tracing::debug!(%status, %message, "Caught response reached the root boundary");
                let heading = format!(
                    "{} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default()
                );
                (
                    status,
                    ErrorPage {
                        title: heading.clone(),
                        heading,
                        detail: None,
                    },
                )
            }
            RouteError::Unexpected(e) => {
                tracing::error!(error = %e, "Unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorPage {
                        title: "Uh-oh!".to_string(),
                        heading: "App Error".to_string(),
                        detail: Some(
                            "Something unexpected went wrong. Sorry about that.".to_string(),
                        ),
                    },
                )
            }
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to render error page");
                (status, status.to_string()).into_response()
            }
        }
    }
}
