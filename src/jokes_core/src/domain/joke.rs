use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{
    user::UserId,
    validation::{validate_joke_content, validate_joke_name},
};

#[derive(Debug, Error, PartialEq)]
pub enum JokeError {
    #[error("{0}")]
    InvalidName(&'static str),
    #[error("{0}")]
    InvalidContent(&'static str),
    #[error("Invalid joke id: {0}")]
    InvalidJokeId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JokeId(Uuid);

impl JokeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(id: &str) -> Result<Self, JokeError> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|e| JokeError::InvalidJokeId(e.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for JokeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for JokeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for JokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeName(String);

impl JokeName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JokeName {
    type Error = JokeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match validate_joke_name(&value) {
            Some(message) => Err(JokeError::InvalidName(message)),
            None => Ok(Self(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeContent(String);

impl JokeContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JokeContent {
    type Error = JokeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match validate_joke_content(&value) {
            Some(message) => Err(JokeError::InvalidContent(message)),
            None => Ok(Self(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Joke {
    pub id: JokeId,
    pub name: JokeName,
    pub content: JokeContent,
    pub jokester_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Joke {
    /// Rebuild a joke from raw store columns.
    pub fn parse(
        id: Uuid,
        name: String,
        content: String,
        jokester_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<Self, JokeError> {
        Ok(Self {
            id: JokeId::from(id),
            name: JokeName::try_from(name)?,
            content: JokeContent::try_from(content)?,
            jokester_id: UserId::from(jokester_id),
            created_at,
        })
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.jokester_id == user_id
    }
}

/// Sidebar projection of a joke.
#[derive(Debug, Clone, PartialEq)]
pub struct JokeListItem {
    pub id: JokeId,
    pub name: String,
}

impl From<&Joke> for JokeListItem {
    fn from(joke: &Joke) -> Self {
        Self {
            id: joke.id,
            name: joke.name.as_str().to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewJoke {
    pub name: JokeName,
    pub content: JokeContent,
    pub jokester_id: UserId,
}
