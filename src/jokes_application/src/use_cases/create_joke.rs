use jokes_core::{
    Joke, JokeContent, JokeName, JokeStore, JokeStoreError, NewJoke, UserId, UserStore,
    UserStoreError,
};

#[derive(Debug, thiserror::Error)]
pub enum CreateJokeError {
    #[error("Jokester {0} does not exist")]
    UnknownJokester(UserId),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Joke store error: {0}")]
    JokeStoreError(#[from] JokeStoreError),
}

/// Create joke use case - stores a validated joke for an existing user
pub struct CreateJokeUseCase<'a, U, J>
where
    U: UserStore,
    J: JokeStore,
{
    user_store: &'a U,
    joke_store: &'a J,
}

impl<'a, U, J> CreateJokeUseCase<'a, U, J>
where
    U: UserStore,
    J: JokeStore,
{
    pub fn new(user_store: &'a U, joke_store: &'a J) -> Self {
        Self {
            user_store,
            joke_store,
        }
    }

    #[tracing::instrument(name = "CreateJokeUseCase::execute", skip(self, name, content))]
    pub async fn execute(
        &self,
        jokester_id: UserId,
        name: JokeName,
        content: JokeContent,
    ) -> Result<Joke, CreateJokeError> {
        // The jokester must exist when the joke is created.
        if self.user_store.find_by_id(jokester_id).await?.is_none() {
            return Err(CreateJokeError::UnknownJokester(jokester_id));
        }

        let joke = self
            .joke_store
            .add_joke(NewJoke {
                name,
                content,
                jokester_id,
            })
            .await?;

        tracing::info!(joke_id = %joke.id, "Created joke");
        Ok(joke)
    }
}
