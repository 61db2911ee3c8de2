use crate::sql::error::SqlError;
use crate::sql::traits::{CommentSqlLogic, LikeSqlLogic, UserSqlLogic, VideoSqlLogic};

use reel_settings::DatabaseSettings;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use tracing::{info, instrument};

/// Entry point for all relational access. Queries are exposed as static
/// methods over a shared `Pool<Postgres>` via the per-entity logic traits.
#[derive(Debug, Clone)]
pub struct PostgresClient {
    pub pool: Pool<Postgres>,
}

impl PostgresClient {
    /// Create a new PostgresClient and run pending migrations.
    ///
    /// # Arguments
    ///
    /// * `pool` - An optional pre-built pool (tests hand one in)
    /// * `database_settings` - Connection settings used when no pool is given
    pub async fn new(
        pool: Option<Pool<Postgres>>,
        database_settings: &DatabaseSettings,
    ) -> Result<Self, SqlError> {
        let pool = match pool {
            Some(pool) => pool,
            None => Self::create_db_pool(database_settings).await?,
        };

        let client = Self { pool };
        client.run_migrations().await?;

        Ok(client)
    }

    #[instrument(skip_all)]
    pub async fn create_db_pool(
        database_settings: &DatabaseSettings,
    ) -> Result<Pool<Postgres>, SqlError> {
        let pool = PgPoolOptions::new()
            .max_connections(database_settings.max_connections)
            .connect(&database_settings.connection_uri)
            .await
            .map_err(|e| SqlError::ConnectionError(e.to_string()))?;

        info!("✅ Successfully connected to database");

        Ok(pool)
    }

    async fn run_migrations(&self) -> Result<(), SqlError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;

        info!("✅ Successfully ran database migrations");

        Ok(())
    }
}

impl UserSqlLogic for PostgresClient {}
impl VideoSqlLogic for PostgresClient {}
impl CommentSqlLogic for PostgresClient {}
impl LikeSqlLogic for PostgresClient {}
