use jokes_core::{User, UserId, UserStore, UserStoreError};

/// Resolves the user behind a session id.
pub struct CurrentUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> CurrentUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    /// A session pointing at a user that no longer exists is anonymous.
    #[tracing::instrument(name = "CurrentUserUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: Option<UserId>) -> Result<Option<User>, UserStoreError> {
        match user_id {
            Some(id) => self.user_store.find_by_id(id).await,
            None => Ok(None),
        }
    }
}
