use jokes_core::{Joke, JokeQuery, JokeStore, JokeStoreError};
use rand::Rng;

#[derive(Debug, thiserror::Error)]
pub enum RandomJokeError {
    #[error("No random joke found")]
    NoJokes,
    #[error("Joke store error: {0}")]
    JokeStoreError(#[from] JokeStoreError),
}

/// Random joke use case - picks a row offset uniformly from the joke count
pub struct RandomJokeUseCase<'a, J>
where
    J: JokeStore,
{
    joke_store: &'a J,
}

impl<'a, J> RandomJokeUseCase<'a, J>
where
    J: JokeStore,
{
    pub fn new(joke_store: &'a J) -> Self {
        Self { joke_store }
    }

    #[tracing::instrument(name = "RandomJokeUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Joke, RandomJokeError> {
        let count = self.joke_store.count().await?;
        if count == 0 {
            return Err(RandomJokeError::NoJokes);
        }

        let skip = rand::rng().random_range(0..count);

        // A joke deleted between count and fetch leaves the window empty.
        self.joke_store
            .find_many(JokeQuery::nth(skip))
            .await?
            .into_iter()
            .next()
            .ok_or(RandomJokeError::NoJokes)
    }
}
