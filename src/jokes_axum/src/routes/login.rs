use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use jokes_application::{LoginUseCase, RegisterError, RegisterUseCase};
use jokes_core::{
    Password, PasswordHasher, UserStore, Username, validate_password, validate_username,
};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::{
    error::RouteError,
    session,
    state::AppState,
    views::{ErrorPage, LoginFieldErrors, LoginFields, LoginPage, render},
};

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    #[serde(rename = "redirectTo")]
    pub redirect_to: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(rename = "loginType")]
    pub login_type: Option<String>,
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
    #[serde(rename = "redirectTo")]
    pub redirect_to: Option<String>,
}

/// `GET /login`
pub async fn login_page(Query(query): Query<LoginQuery>) -> Response {
    let page = LoginPage {
        redirect_to: query.redirect_to.unwrap_or_default(),
        fields: LoginFields {
            login_type: "login".to_string(),
            username: String::new(),
        },
        ..LoginPage::default()
    };

    match render(StatusCode::OK, &page) {
        Ok(response) => response,
        Err(e) => login_boundary(e),
    }
}

/// `POST /login`: logs in or registers depending on `loginType`.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, J, H>(
    State(state): State<AppState<U, J, H>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response
where
    U: UserStore + Clone + 'static,
    J: Clone + Send + Sync + 'static,
    H: PasswordHasher + Clone + 'static,
{
    match submit_login(&state, jar, form).await {
        Ok(response) => response,
        Err(e) => login_boundary(e),
    }
}

async fn submit_login<U, J, H>(
    state: &AppState<U, J, H>,
    jar: CookieJar,
    form: LoginForm,
) -> Result<Response, RouteError>
where
    U: UserStore,
    H: PasswordHasher,
{
    let redirect_to = form.redirect_to.unwrap_or_default();

    let (Some(login_type), Some(username), Some(password)) =
        (form.login_type, form.username, form.password)
    else {
        return render(
            StatusCode::BAD_REQUEST,
            &LoginPage {
                redirect_to,
                form_error: Some("Form not submitted correctly.".to_string()),
                ..LoginPage::default()
            },
        );
    };

    let fields = LoginFields {
        login_type,
        username,
    };
    let field_errors = LoginFieldErrors {
        username: validate_username(&fields.username),
        password: validate_password(password.expose_secret()),
    };
    if field_errors.any() {
        return render(
            StatusCode::BAD_REQUEST,
            &LoginPage {
                redirect_to,
                fields,
                field_errors,
                form_error: None,
            },
        );
    }

    let form_error = |redirect_to: String, fields: LoginFields, message: String| {
        render(
            StatusCode::BAD_REQUEST,
            &LoginPage {
                redirect_to,
                fields,
                field_errors: LoginFieldErrors::default(),
                form_error: Some(message),
            },
        )
    };

    let username_value =
        Username::try_from(fields.username.clone()).map_err(RouteError::unexpected)?;
    let password = Password::try_from(password).map_err(RouteError::unexpected)?;
    let target = session::safe_redirect(Some(&redirect_to)).to_owned();

    let login_type = fields.login_type.clone();
    let user = match login_type.as_str() {
        "login" => {
            match LoginUseCase::new(&state.user_store, &state.hasher)
                .execute(username_value, password)
                .await?
            {
                Some(user) => user,
                None => {
                    return form_error(
                        redirect_to,
                        fields,
                        "Username/Password combination is incorrect".to_string(),
                    );
                }
            }
        }
        "register" => {
            match RegisterUseCase::new(&state.user_store, &state.hasher)
                .execute(username_value, password)
                .await
            {
                Ok(user) => user,
                Err(e @ RegisterError::UsernameTaken(_)) => {
                    return form_error(redirect_to, fields, e.to_string());
                }
                Err(e) => return Err(e.into()),
            }
        }
        _ => {
            return form_error(redirect_to, fields, "Login type invalid".to_string());
        }
    };

    Ok(session::create_session(&state.sessions, jar, user.id(), &target)?)
}

fn login_boundary(error: RouteError) -> Response {
    match error {
        RouteError::Status { .. } => error.into_response(),
        RouteError::Unexpected(e) => {
            tracing::error!(error = %e, "Login failed");
            let page = ErrorPage {
                title: "Remix Jokes | Login".to_string(),
                heading: "Login Failed".to_string(),
                detail: None,
            };
            render(StatusCode::INTERNAL_SERVER_ERROR, &page)
                .unwrap_or_else(IntoResponse::into_response)
        }
    }
}
