pub mod error;
pub mod feed;
pub mod postgres;
pub mod query;
pub mod schema;
pub mod traits;
