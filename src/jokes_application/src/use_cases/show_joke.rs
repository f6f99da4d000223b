use jokes_core::{Joke, JokeId, JokeStore, JokeStoreError, UserId};

/// What the joke page needs: the joke and whether the viewer may delete it.
#[derive(Debug, Clone)]
pub struct JokeDetail {
    pub joke: Joke,
    pub is_owner: bool,
}

pub struct ShowJokeUseCase<'a, J>
where
    J: JokeStore,
{
    joke_store: &'a J,
}

impl<'a, J> ShowJokeUseCase<'a, J>
where
    J: JokeStore,
{
    pub fn new(joke_store: &'a J) -> Self {
        Self { joke_store }
    }

    #[tracing::instrument(name = "ShowJokeUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        joke_id: JokeId,
        viewer: Option<UserId>,
    ) -> Result<Option<JokeDetail>, JokeStoreError> {
        let joke = self.joke_store.find(joke_id).await?;

        Ok(joke.map(|joke| JokeDetail {
            is_owner: viewer.is_some_and(|id| joke.is_owned_by(id)),
            joke,
        }))
    }
}
