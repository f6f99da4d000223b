pub mod fallback;
pub mod index;
pub mod joke;
pub mod jokes;
pub mod login;
pub mod logout;
pub mod new_joke;

// Re-export for convenience
pub use fallback::not_found;
pub use index::index;
pub use joke::{delete_joke, joke};
pub use jokes::random_joke;
pub use login::{login, login_page};
pub use logout::{logout, logout_page};
pub use new_joke::{create_joke, new_joke};

use axum_extra::extract::CookieJar;
use jokes_adapters::session::SessionManager;
use jokes_application::ListJokesUseCase;
use jokes_core::{JokeStore, UserStore};

use crate::{error::RouteError, session, views::Layout};

/// Loader for the `/jokes` layout: the current user and the newest jokes.
pub(crate) async fn load_layout<U, J>(
    user_store: &U,
    joke_store: &J,
    sessions: &SessionManager,
    jar: &CookieJar,
) -> Result<Layout, RouteError>
where
    U: UserStore,
    J: JokeStore,
{
    let jokes = ListJokesUseCase::new(joke_store).execute().await?;
    let user = session::get_user(user_store, sessions, jar).await?;

    Ok(Layout::new(user, jokes))
}
