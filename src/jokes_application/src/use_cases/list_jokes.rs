use jokes_core::{JokeListItem, JokeQuery, JokeStore, JokeStoreError};

/// How many jokes the sidebar shows.
pub const RECENT_JOKES_LIMIT: usize = 5;

pub struct ListJokesUseCase<'a, J>
where
    J: JokeStore,
{
    joke_store: &'a J,
}

impl<'a, J> ListJokesUseCase<'a, J>
where
    J: JokeStore,
{
    pub fn new(joke_store: &'a J) -> Self {
        Self { joke_store }
    }

    /// The most recently created jokes, newest first.
    #[tracing::instrument(name = "ListJokesUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<JokeListItem>, JokeStoreError> {
        self.joke_store
            .list_items(JokeQuery::newest(RECENT_JOKES_LIMIT))
            .await
    }
}
