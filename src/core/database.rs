//! Database bootstrap - Pool di connessioni SQLite e migrations

use crate::repositories::PoolType;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Apre il pool verso `database_url` e applica le migrations.
///
/// Un database in memoria esiste solo per la connessione che lo ha creato,
/// quindi in quel caso il pool viene limitato a una singola connessione.
#[instrument(skip(database_url))]
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PoolType, sqlx::Error> {
    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new();
    if in_memory {
        debug!("In-memory database, using a single pinned connection");
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    } else {
        pool_options = pool_options.max_connections(max_connections);
    }

    let pool = pool_options.connect_with(options).await?;
    run_migrations(&pool).await?;

    info!("Database ready");
    Ok(pool)
}

/// Database in memoria con schema applicato, per i test
pub async fn connect_in_memory() -> Result<PoolType, sqlx::Error> {
    connect("sqlite::memory:", 1).await
}

/// Applica le migrations embedded da `migrations/`
pub async fn run_migrations(pool: &PoolType) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
