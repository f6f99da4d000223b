use jokes_adapters::session::SessionManager;

/// Everything a route handler needs, shared through axum `State`.
///
/// Stores are cheap to clone; they keep their data behind an `Arc`.
#[derive(Clone)]
pub struct AppState<U, J, H> {
    pub user_store: U,
    pub joke_store: J,
    pub hasher: H,
    pub sessions: SessionManager,
}

impl<U, J, H> AppState<U, J, H> {
    pub fn new(user_store: U, joke_store: J, hasher: H, sessions: SessionManager) -> Self {
        Self {
            user_store,
            joke_store,
            hasher,
            sessions,
        }
    }
}
