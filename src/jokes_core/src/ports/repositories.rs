use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    joke::{Joke, JokeId, JokeListItem, NewJoke},
    user::{NewUser, User, UserId, Username},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user. Fails with `UserAlreadyExists` when the username is taken,
    /// even if a prior lookup said it was free.
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserStoreError>;
}

// JokeStore port trait and errors
#[derive(Debug, Error)]
pub enum JokeStoreError {
    #[error("Joke not found")]
    JokeNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for JokeStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::JokeNotFound, Self::JokeNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JokeOrder {
    /// Insertion order as kept by the store.
    #[default]
    Unordered,
    NewestFirst,
}

/// Pagination window for `JokeStore::find_many`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JokeQuery {
    pub take: usize,
    pub skip: usize,
    pub order: JokeOrder,
}

impl JokeQuery {
    pub fn newest(take: usize) -> Self {
        Self {
            take,
            skip: 0,
            order: JokeOrder::NewestFirst,
        }
    }

    pub fn nth(skip: usize) -> Self {
        Self {
            take: 1,
            skip,
            order: JokeOrder::Unordered,
        }
    }
}

#[async_trait]
pub trait JokeStore: Send + Sync {
    async fn add_joke(&self, joke: NewJoke) -> Result<Joke, JokeStoreError>;
    async fn find(&self, id: JokeId) -> Result<Option<Joke>, JokeStoreError>;
    async fn find_many(&self, query: JokeQuery) -> Result<Vec<Joke>, JokeStoreError>;
    async fn list_items(&self, query: JokeQuery) -> Result<Vec<JokeListItem>, JokeStoreError>;
    async fn count(&self) -> Result<usize, JokeStoreError>;
    async fn delete_joke(&self, id: JokeId) -> Result<(), JokeStoreError>;
}
