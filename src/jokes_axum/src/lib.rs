//! Axum pages for the jokes application.
//!
//! Each page is a loader (`GET`) and optionally an action (`POST`). Handlers
//! return a rendered page or a [`RouteError`], which the page's boundary turns
//! into an in-context message. Errors a page does not claim fall through to the
//! root boundary, the `IntoResponse` impl of [`RouteError`].
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  jokes_application: use cases            │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  jokes_axum: pages                       │
//! │  - session operations over CookieJar     │
//! │  - askama views                          │
//! │  - per-page boundaries                   │
//! └──────────────────────────────────────────┘
//! ```

pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

// Re-export for convenience
pub use error::RouteError;
pub use state::AppState;
