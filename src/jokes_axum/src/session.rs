//! Request-level session operations built on the cookie primitives in
//! `jokes_adapters::session`.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use jokes_adapters::config::DEFAULT_REDIRECT;
use jokes_adapters::session::{SessionError, SessionManager};
use jokes_application::CurrentUserUseCase;
use jokes_core::{User, UserId, UserStore, UserStoreError};

/// Start a session for `user_id` and send the browser to `redirect_to`.
pub fn create_session(
    sessions: &SessionManager,
    jar: CookieJar,
    user_id: UserId,
    redirect_to: &str,
) -> Result<Response, SessionError> {
    let cookie = sessions.issue_cookie(user_id)?;
    tracing::info!(%user_id, "Session created");

    Ok((jar.add(cookie), Redirect::to(redirect_to)).into_response())
}

pub fn get_user_id(sessions: &SessionManager, jar: &CookieJar) -> Option<UserId> {
    sessions.read_user_id(jar)
}

pub fn require_user_id(sessions: &SessionManager, jar: &CookieJar) -> Result<UserId, SessionError> {
    get_user_id(sessions, jar).ok_or(SessionError::Unauthorized)
}

/// Load the user behind the session. A session whose user is gone reads as anonymous.
pub async fn get_user<U>(
    user_store: &U,
    sessions: &SessionManager,
    jar: &CookieJar,
) -> Result<Option<User>, UserStoreError>
where
    U: UserStore,
{
    CurrentUserUseCase::new(user_store)
        .execute(get_user_id(sessions, jar))
        .await
}

pub fn destroy_session(sessions: &SessionManager, jar: CookieJar) -> Response {
    let jar = jar.add(sessions.removal_cookie());
    (jar, Redirect::to("/login")).into_response()
}

/// Only local paths are followed after login; anything else lands on the jokes page.
pub fn safe_redirect(redirect_to: Option<&str>) -> &str {
    match redirect_to {
        Some(path) if is_local_path(path) => path,
        _ => DEFAULT_REDIRECT,
    }
}

/// Browsers read both `//host` and `/\host` as another origin. Anything outside
/// visible ASCII cannot go into a `Location` header as is.
fn is_local_path(path: &str) -> bool {
    let bytes = path.as_bytes();

    bytes.first() == Some(&b'/')
        && !matches!(bytes.get(1), Some(b'/' | b'\\'))
        && bytes.iter().all(u8::is_ascii_graphic)
}
