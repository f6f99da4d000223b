//! Mock ports shared by the use case tests.

use std::sync::Arc;

use chrono::Utc;
use jokes_core::{
    Joke, JokeId, JokeListItem, JokeOrder, JokeQuery, JokeStore, JokeStoreError, NewJoke,
    NewUser, Password, PasswordHash, PasswordHasher, PasswordHasherError, User, UserId,
    UserStore, UserStoreError, Username,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockUserStore {
    pub users: Arc<RwLock<Vec<User>>>,
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username() == &user.username) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let user = User::new(UserId::new(), user.username, user.password_hash);
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username() == username).cloned())
    }
}

#[derive(Clone, Default)]
pub struct MockJokeStore {
    pub jokes: Arc<RwLock<Vec<Joke>>>,
}

#[async_trait::async_trait]
impl JokeStore for MockJokeStore {
    async fn add_joke(&self, joke: NewJoke) -> Result<Joke, JokeStoreError> {
        let joke = Joke {
            id: JokeId::new(),
            name: joke.name,
            content: joke.content,
            jokester_id: joke.jokester_id,
            created_at: Utc::now(),
        };
        self.jokes.write().await.push(joke.clone());
        Ok(joke)
    }

    async fn find(&self, id: JokeId) -> Result<Option<Joke>, JokeStoreError> {
        let jokes = self.jokes.read().await;
        Ok(jokes.iter().find(|j| j.id == id).cloned())
    }

    async fn find_many(&self, query: JokeQuery) -> Result<Vec<Joke>, JokeStoreError> {
        let mut jokes = self.jokes.read().await.clone();
        if query.order == JokeOrder::NewestFirst {
            jokes.reverse();
        }
        Ok(jokes.into_iter().skip(query.skip).take(query.take).collect())
    }

    async fn list_items(&self, query: JokeQuery) -> Result<Vec<JokeListItem>, JokeStoreError> {
        let jokes = self.find_many(query).await?;
        Ok(jokes.iter().map(JokeListItem::from).collect())
    }

    async fn count(&self) -> Result<usize, JokeStoreError> {
        Ok(self.jokes.read().await.len())
    }

    async fn delete_joke(&self, id: JokeId) -> Result<(), JokeStoreError> {
        let mut jokes = self.jokes.write().await;
        let before = jokes.len();
        jokes.retain(|j| j.id != id);
        if jokes.len() == before {
            return Err(JokeStoreError::JokeNotFound);
        }
        Ok(())
    }
}

/// Reversible "hash" so tests don't pay for Argon2.
#[derive(Clone, Default)]
pub struct PlainHasher;

#[async_trait::async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        Ok(PasswordHash::new(Secret::from(format!(
            "plain:{}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(
        &self,
        password: Password,
        expected: PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let candidate = format!("plain:{}", password.as_ref().expose_secret());
        Ok(&candidate == expected.as_ref().expose_secret())
    }
}

pub fn username(value: &str) -> Username {
    Username::try_from(value.to_string()).unwrap()
}

pub fn password(value: &str) -> Password {
    Password::try_from(Secret::from(value.to_string())).unwrap()
}
