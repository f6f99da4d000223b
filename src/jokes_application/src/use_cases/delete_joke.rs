use jokes_core::{JokeId, JokeStore, JokeStoreError, UserId};

#[derive(Debug, thiserror::Error)]
pub enum DeleteJokeError {
    #[error("Can't delete what does not exist")]
    JokeNotFound,
    #[error("Pssh, nice try. That's not your joke")]
    NotOwner,
    #[error("Joke store error: {0}")]
    JokeStoreError(JokeStoreError),
}

impl From<JokeStoreError> for DeleteJokeError {
    fn from(error: JokeStoreError) -> Self {
        match error {
            JokeStoreError::JokeNotFound => DeleteJokeError::JokeNotFound,
            e => DeleteJokeError::JokeStoreError(e),
        }
    }
}

/// Delete joke use case - only the jokester may remove their joke
pub struct DeleteJokeUseCase<'a, J>
where
    J: JokeStore,
{
    joke_store: &'a J,
}

impl<'a, J> DeleteJokeUseCase<'a, J>
where
    J: JokeStore,
{
    pub fn new(joke_store: &'a J) -> Self {
        Self { joke_store }
    }

    /// Check that the joke exists before asking who is deleting it.
    #[tracing::instrument(name = "DeleteJokeUseCase::ensure_exists", skip(self))]
    pub async fn ensure_exists(&self, joke_id: JokeId) -> Result<(), DeleteJokeError> {
        match self.joke_store.find(joke_id).await? {
            Some(_) => Ok(()),
            None => Err(DeleteJokeError::JokeNotFound),
        }
    }

    #[tracing::instrument(name = "DeleteJokeUseCase::execute", skip(self))]
    pub async fn execute(&self, joke_id: JokeId, user_id: UserId) -> Result<(), DeleteJokeError> {
        let joke = self
            .joke_store
            .find(joke_id)
            .await?
            .ok_or(DeleteJokeError::JokeNotFound)?;

        if !joke.is_owned_by(user_id) {
            tracing::warn!("Refusing to delete a joke for a user who does not own it");
            return Err(DeleteJokeError::NotOwner);
        }

        self.joke_store.delete_joke(joke_id).await?;
        tracing::info!("Deleted joke");
        Ok(())
    }
}
