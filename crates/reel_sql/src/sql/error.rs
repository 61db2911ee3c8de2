use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlError {
    #[error(transparent)]
    SqlxError(#[from] SqlxError),

    #[error("Failed to run migrations")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(String),
}
