use jokes_core::{NewUser, User, UserId, UserStore, UserStoreError, Username};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres, Row, postgres::PgRow};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

fn user_from_row(row: PgRow) -> Result<User, UserStoreError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let username: String = row
        .try_get("username")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

    User::parse(id, username, Secret::from(password_hash))
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let id = UserId::new();

        let query = sqlx::query(
            r#"
                INSERT INTO users (id, username, password_hash)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(id.as_uuid())
        .bind(user.username.as_str())
        .bind(user.password_hash.as_ref().expose_secret());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(User::new(id, user.username, user.password_hash))
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let query = sqlx::query(
            r#"
                SELECT id, username, password_hash
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid());

        query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?
            .map(user_from_row)
            .transpose()
    }

    #[tracing::instrument(name = "Retrieving user by username from PostgreSQL", skip_all)]
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserStoreError> {
        let query = sqlx::query(
            r#"
                SELECT id, username, password_hash
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username.as_str());

        query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?
            .map(user_from_row)
            .transpose()
    }
}
