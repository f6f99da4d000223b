use jokes_core::{
    NewUser, Password, PasswordHasher, PasswordHasherError, User, UserStore, UserStoreError,
    Username,
};

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User with username {0} already exists")]
    UsernameTaken(Username),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Register use case - creates a user with a freshly hashed password
pub struct RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H) -> Self {
        Self { user_store, hasher }
    }

    /// Execute the register use case
    ///
    /// The up-front lookup only gives a friendly error; two concurrent
    /// registrations are settled by the store's uniqueness check on insert,
    /// which is reported as the same `UsernameTaken` error.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Username,
        password: Password,
    ) -> Result<User, RegisterError> {
        if self
            .user_store
            .find_by_username(&username)
            .await
            .map_err(RegisterError::UserStoreError)?
            .is_some()
        {
            return Err(RegisterError::UsernameTaken(username));
        }

        let password_hash = self.hasher.hash(password).await?;

        let new_user = NewUser {
            username: username.clone(),
            password_hash,
        };

        match self.user_store.add_user(new_user).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id(), "Registered new user");
                Ok(user)
            }
            Err(UserStoreError::UserAlreadyExists) => Err(RegisterError::UsernameTaken(username)),
            Err(e) => Err(RegisterError::UserStoreError(e)),
        }
    }
}
