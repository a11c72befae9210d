use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Build the shared connection pool; sizing and acquire timeout come from
/// configuration rather than being baked in.
pub async fn create_pool(config: &Config) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.db_acquire_timeout_secs,
        ))
        .connect(&config.database_url)
        .await
        .expect("Failed to create database pool")
}
