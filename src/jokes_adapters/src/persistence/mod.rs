pub mod hashmap_joke_store;
pub mod hashmap_user_store;
pub mod postgres_joke_store;
pub mod postgres_user_store;

pub use hashmap_joke_store::HashMapJokeStore;
pub use hashmap_user_store::HashMapUserStore;
pub use postgres_joke_store::PostgresJokeStore;
pub use postgres_user_store::PostgresUserStore;
