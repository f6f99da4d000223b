use std::path::Path;

use axum::{Router, routing::get};
use jokes_adapters::session::SessionManager;
use jokes_axum::{AppState, routes};
use jokes_core::{JokeStore, PasswordHasher, UserStore};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The jokes web application: every page plus the static assets.
pub struct JokesService {
    router: Router,
}

impl JokesService {
    /// Create a new JokesService with the provided stores, hasher and session manager
    ///
    /// # Arguments
    /// * `user_store` - Store for user accounts (must be Clone)
    /// * `joke_store` - Store for jokes (must be Clone)
    /// * `hasher` - Password hasher used by login and registration
    /// * `sessions` - Issues and reads the session cookie
    /// * `assets_dir` - Directory served under `/assets`
    pub fn new<U, J, H>(
        user_store: U,
        joke_store: J,
        hasher: H,
        sessions: SessionManager,
        assets_dir: impl AsRef<Path>,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        J: JokeStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        let state = AppState::new(user_store, joke_store, hasher, sessions);

        let router = Router::new()
            .route("/", get(routes::index))
            .route("/jokes", get(routes::random_joke::<U, J, H>))
            // Static segment wins over the `{id}` capture
            .route(
                "/jokes/new",
                get(routes::new_joke::<U, J, H>).post(routes::create_joke::<U, J, H>),
            )
            .route(
                "/jokes/{id}",
                get(routes::joke::<U, J, H>).post(routes::delete_joke::<U, J, H>),
            )
            .route(
                "/login",
                get(routes::login_page).post(routes::login::<U, J, H>),
            )
            .route(
                "/logout",
                get(routes::logout_page).post(routes::logout::<U, J, H>),
            )
            .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
            .fallback(routes::not_found)
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the JokesService into a router that can be served or nested
    pub fn as_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the jokes service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_router();

        tracing::info!("Jokes service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
