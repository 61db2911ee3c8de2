pub mod sql;

pub use sql::feed::PgFeedSource;
pub use sql::postgres::PostgresClient;
