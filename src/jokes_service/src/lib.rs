pub mod helpers;
mod jokes_service;
pub mod tracing;

pub use helpers::{DatabaseSetupError, configure_postgresql, get_postgres_pool};
pub use jokes_service::JokesService;
