use async_trait::async_trait;
use reel_feed::{FeedCursor, FeedSource};
use reel_types::VideoWithUser;
use sqlx::{Pool, Postgres};

use crate::sql::error::SqlError;
use crate::sql::traits::VideoSqlLogic;
use crate::PostgresClient;

/// The relational backend of the feed. Borrows the shared pool; the
/// ordering and boundary predicate live in the SQL script so the database
/// can serve the page off the `(created_at DESC, id DESC)` index.
pub struct PgFeedSource<'a> {
    pool: &'a Pool<Postgres>,
}

impl<'a> PgFeedSource<'a> {
    pub fn new(pool: &'a Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedSource for PgFeedSource<'_> {
    type Item = VideoWithUser;
    type Error = SqlError;

    async fn fetch_after(
        &self,
        boundary: Option<&FeedCursor>,
        fetch_limit: i64,
    ) -> Result<Vec<Self::Item>, Self::Error> {
        PostgresClient::get_video_feed_page(self.pool, boundary, fetch_limit).await
    }
}
