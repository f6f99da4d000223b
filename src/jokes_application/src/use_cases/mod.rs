pub mod create_joke;
pub mod current_user;
pub mod delete_joke;
pub mod list_jokes;
pub mod login;
pub mod random_joke;
pub mod register;
pub mod show_joke;

// Re-export for convenience
pub use create_joke::{CreateJokeError, CreateJokeUseCase};
pub use current_user::CurrentUserUseCase;
pub use delete_joke::{DeleteJokeError, DeleteJokeUseCase};
pub use list_jokes::{ListJokesUseCase, RECENT_JOKES_LIMIT};
pub use login::{LoginError, LoginUseCase};
pub use random_joke::{RandomJokeError, RandomJokeUseCase};
pub use register::{RegisterError, RegisterUseCase};
pub use show_joke::{JokeDetail, ShowJokeUseCase};
