pub mod cookie_session;

pub use cookie_session::{Claims, SessionConfig, SessionError, SessionManager};
