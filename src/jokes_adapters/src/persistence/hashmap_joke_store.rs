use std::sync::Arc;
use tokio::sync::RwLock;

use chrono::Utc;
use jokes_core::{
    Joke, JokeId, JokeListItem, JokeOrder, JokeQuery, JokeStore, JokeStoreError, NewJoke,
};

/// In-memory joke store. Jokes are kept in insertion order.
#[derive(Default, Clone)]
pub struct HashMapJokeStore {
    jokes: Arc<RwLock<Vec<Joke>>>,
}

impl HashMapJokeStore {
    pub fn new() -> Self {
        Self {
            jokes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn window(jokes: &[Joke], query: JokeQuery) -> Vec<Joke> {
        let mut ordered: Vec<&Joke> = jokes.iter().collect();
        if query.order == JokeOrder::NewestFirst {
            // later inserts win ties on created_at
            ordered.reverse();
            ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }

        ordered
            .into_iter()
            .skip(query.skip)
            .take(query.take)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl JokeStore for HashMapJokeStore {
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
        let jokes = self.jokes.read().await;
        Ok(Self::window(&jokes, query))
    }

    async fn list_items(&self, query: JokeQuery) -> Result<Vec<JokeListItem>, JokeStoreError> {
        let jokes = self.jokes.read().await;
        Ok(Self::window(&jokes, query)
            .iter()
            .map(JokeListItem::from)
            .collect())
    }

    async fn count(&self) -> Result<usize, JokeStoreError> {
        Ok(self.jokes.read().await.len())
    }

    async fn delete_joke(&self, id: JokeId) -> Result<(), JokeStoreError> {
        let mut jokes = self.jokes.write().await;
        let position = jokes
            .iter()
            .position(|j| j.id == id)
            .ok_or(JokeStoreError::JokeNotFound)?;

        jokes.remove(position);
        Ok(())
    }
}
