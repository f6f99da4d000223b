use color_eyre::eyre::Result;
use jokes::{
    Argon2PasswordHasher, HashMapJokeStore, HashMapUserStore, JokeStore, JokesService,
    JokesSetting, PasswordHasher, PostgresJokeStore, PostgresUserStore, SessionManager, UserStore,
    configure_postgresql,
};
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = JokesSetting::load()?;

    let sessions = SessionManager::new(config.session.into());
    let hasher = Argon2PasswordHasher::new();
    let assets_dir = config.application.assets_dir;

    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;

    match config.postgres.url {
        Some(url) => {
            // Setup database connection pool and run migrations
            let pg_pool = configure_postgresql(&url).await?;

            let user_store = PostgresUserStore::new(pg_pool.clone());
            let joke_store = PostgresJokeStore::new(pg_pool);

            run(user_store, joke_store, hasher, sessions, assets_dir, listener).await
        }
        None => {
            tracing::warn!("No database configured, jokes are kept in memory");

            run(
                HashMapUserStore::new(),
                HashMapJokeStore::new(),
                hasher,
                sessions,
                assets_dir,
                listener,
            )
            .await
        }
    }
}

async fn run<U, J, H>(
    user_store: U,
    joke_store: J,
    hasher: H,
    sessions: SessionManager,
    assets_dir: PathBuf,
    listener: tokio::net::TcpListener,
) -> Result<()>
where
    U: UserStore + Clone + 'static,
    J: JokeStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    tracing::info!("Starting jokes service...");

    JokesService::new(user_store, joke_store, hasher, sessions, assets_dir)
        .run_standalone(listener)
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
