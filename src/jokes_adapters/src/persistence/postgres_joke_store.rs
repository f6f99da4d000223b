use chrono::{DateTime, Utc};
use jokes_core::{
    Joke, JokeId, JokeListItem, JokeOrder, JokeQuery, JokeStore, JokeStoreError, NewJoke,
};
use sqlx::{Pool, Postgres, Row, postgres::PgRow};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresJokeStore {
    pool: sqlx::PgPool,
}

impl PostgresJokeStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresJokeStore { pool }
    }
}

fn unexpected(e: impl ToString) -> JokeStoreError {
    JokeStoreError::UnexpectedError(e.to_string())
}

fn joke_from_row(row: PgRow) -> Result<Joke, JokeStoreError> {
    let id: Uuid = row.try_get("id").map_err(unexpected)?;
    let name: String = row.try_get("name").map_err(unexpected)?;
    let content: String = row.try_get("content").map_err(unexpected)?;
    let jokester_id: Uuid = row.try_get("jokester_id").map_err(unexpected)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(unexpected)?;

    Joke::parse(id, name, content, jokester_id, created_at).map_err(unexpected)
}

fn order_clause(order: JokeOrder) -> &'static str {
    match order {
        JokeOrder::Unordered => "",
        JokeOrder::NewestFirst => "ORDER BY created_at DESC",
    }
}

fn to_i64(value: usize) -> Result<i64, JokeStoreError> {
    i64::try_from(value).map_err(unexpected)
}

#[async_trait::async_trait]
impl JokeStore for PostgresJokeStore {
    #[tracing::instrument(name = "Adding joke to PostgreSQL", skip_all)]
    async fn add_joke(&self, joke: NewJoke) -> Result<Joke, JokeStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO jokes (id, name, content, jokester_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, content, jokester_id, created_at
            "#,
        )
        .bind(*JokeId::new().as_uuid())
        .bind(joke.name.as_str())
        .bind(joke.content.as_str())
        .bind(joke.jokester_id.as_uuid());

        let row = query.fetch_one(&self.pool).await.map_err(unexpected)?;
        joke_from_row(row)
    }

    #[tracing::instrument(name = "Retrieving joke from PostgreSQL", skip_all)]
    async fn find(&self, id: JokeId) -> Result<Option<Joke>, JokeStoreError> {
        let query = sqlx::query(
            r#"
                SELECT id, name, content, jokester_id, created_at
                FROM jokes
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid());

        query
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?
            .map(joke_from_row)
            .transpose()
    }

    #[tracing::instrument(name = "Retrieving jokes from PostgreSQL", skip_all)]
    async fn find_many(&self, query: JokeQuery) -> Result<Vec<Joke>, JokeStoreError> {
        let sql = format!(
            "SELECT id, name, content, jokester_id, created_at FROM jokes {} LIMIT $1 OFFSET $2",
            order_clause(query.order)
        );

        sqlx::query(&sql)
            .bind(to_i64(query.take)?)
            .bind(to_i64(query.skip)?)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?
            .into_iter()
            .map(joke_from_row)
            .collect()
    }

    #[tracing::instrument(name = "Listing joke names from PostgreSQL", skip_all)]
    async fn list_items(&self, query: JokeQuery) -> Result<Vec<JokeListItem>, JokeStoreError> {
        let sql = format!(
            "SELECT id, name FROM jokes {} LIMIT $1 OFFSET $2",
            order_clause(query.order)
        );

        let rows = sqlx::query(&sql)
            .bind(to_i64(query.take)?)
            .bind(to_i64(query.skip)?)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;

        rows.into_iter()
            .map(|row| {
                let id: Uuid = row.try_get("id").map_err(unexpected)?;
                let name: String = row.try_get("name").map_err(unexpected)?;
                Ok(JokeListItem {
                    id: JokeId::from(id),
                    name,
                })
            })
            .collect()
    }

    #[tracing::instrument(name = "Counting jokes in PostgreSQL", skip_all)]
    async fn count(&self) -> Result<usize, JokeStoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jokes")
            .fetch_one(&self.pool)
            .await
            .map_err(unexpected)?;

        usize::try_from(count).map_err(unexpected)
    }

    #[tracing::instrument(name = "Deleting joke from PostgreSQL", skip_all)]
    async fn delete_joke(&self, id: JokeId) -> Result<(), JokeStoreError> {
        let result = sqlx::query("DELETE FROM jokes WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(JokeStoreError::JokeNotFound);
        }

        Ok(())
    }
}
