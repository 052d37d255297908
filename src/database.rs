use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

#[derive(Clone)]
pub struct Database {
    pub pool: Pool<Postgres>,
}

impl Database {
    /// Opens the pool and establishes the first connection, so an unreachable
    /// server or bad credentials surface here rather than on the first request.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = match &config.url {
            Some(url) => url.parse::<PgConnectOptions>()?,
            None => PgConnectOptions::new()
                .host(&config.host)
                .port(config.port)
                .username(&config.user)
                .password(&config.password)
                .database(&config.db),
        };

        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        info!("Connected to PostgreSQL (pool size {})", config.pool_size);
        Ok(Database { pool })
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
