use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use jokes_core::{NewUser, User, UserId, UserStore, UserStoreError, Username};

#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        // Uniqueness check and insert happen under the same write lock.
        let mut users = self.users.write().await;
        if users.values().any(|u| u.username() == &user.username) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let user = User::new(UserId::new(), user.username, user.password_hash);
        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username() == username).cloned())
    }
}
