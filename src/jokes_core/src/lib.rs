pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    joke::{Joke, JokeContent, JokeError, JokeId, JokeListItem, JokeName, NewJoke},
    user::{NewUser, Password, PasswordHash, User, UserError, UserId, Username},
    validation::{
        MIN_JOKE_CONTENT_LENGTH, MIN_JOKE_NAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
        validate_joke_content, validate_joke_name, validate_password, validate_username,
    },
};

pub use ports::{
    repositories::{JokeOrder, JokeQuery, JokeStore, JokeStoreError, UserStore, UserStoreError},
    services::{PasswordHasher, PasswordHasherError},
};
