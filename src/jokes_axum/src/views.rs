use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use jokes_core::{Joke, JokeListItem, User};

use crate::error::RouteError;

pub fn render<T: Template>(status: StatusCode, page: &T) -> Result<Response, RouteError> {
    let html = page.render()?;
    Ok((status, Html(html)).into_response())
}

#[derive(Debug, Clone)]
pub struct JokeLink {
    pub id: String,
    pub name: String,
}

impl From<JokeListItem> for JokeLink {
    fn from(item: JokeListItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
        }
    }
}

/// Data shared by every page under `/jokes`.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub username: Option<String>,
    pub jokes: Vec<JokeLink>,
}

impl Layout {
    pub fn new(user: Option<User>, jokes: Vec<JokeListItem>) -> Self {
        Self {
            username: user.map(|u| u.username().to_string()),
            jokes: jokes.into_iter().map(JokeLink::from).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JokeView {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl From<&Joke> for JokeView {
    fn from(joke: &Joke) -> Self {
        Self {
            id: joke.id.to_string(),
            name: joke.name.as_str().to_owned(),
            content: joke.content.as_str().to_owned(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: String,
    pub heading: String,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LoginFields {
    pub login_type: String,
    pub username: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoginFieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginFieldErrors {
    pub fn any(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}

#[derive(Template, Default)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub redirect_to: String,
    pub fields: LoginFields,
    pub field_errors: LoginFieldErrors,
    pub form_error: Option<String>,
}

#[derive(Template)]
#[template(path = "jokes_index.html")]
pub struct RandomJokePage {
    pub layout: Layout,
    pub joke: JokeView,
}

#[derive(Template)]
#[template(path = "joke.html")]
pub struct JokePage {
    pub layout: Layout,
    pub joke: JokeView,
    pub is_owner: bool,
}

#[derive(Debug, Clone, Default)]
pub struct JokeFields {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct JokeFieldErrors {
    pub name: Option<&'static str>,
    pub content: Option<&'static str>,
}

impl JokeFieldErrors {
    pub fn any(&self) -> bool {
        self.name.is_some() || self.content.is_some()
    }
}

#[derive(Template)]
#[template(path = "new_joke.html")]
pub struct NewJokePage {
    pub layout: Layout,
    pub fields: JokeFields,
    pub field_errors: JokeFieldErrors,
    pub form_error: Option<String>,
}

/// Fallback content rendered inside the jokes layout by a page boundary.
#[derive(Template)]
#[template(path = "jokes_boundary.html")]
pub struct JokesBoundaryPage {
    pub layout: Layout,
    pub title: String,
    pub message: String,
    pub login_link: Option<String>,
}
