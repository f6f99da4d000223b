use jokes_core::{
    Password, PasswordHasher, PasswordHasherError, User, UserStore, UserStoreError, Username,
};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Login use case - checks a username/password pair against the user store
pub struct LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H) -> Self {
        Self { user_store, hasher }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// `Some(user)` when the credentials match. An unknown username and a wrong
    /// password both yield `None` so callers cannot tell them apart.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        password: Password,
    ) -> Result<Option<User>, LoginError> {
        let Some(user) = self.user_store.find_by_username(&username).await? else {
            tracing::debug!("No user with that username");
            return Ok(None);
        };

        let matches = self
            .hasher
            .verify(password, user.password_hash().clone())
            .await?;

        Ok(matches.then_some(user))
    }
}
