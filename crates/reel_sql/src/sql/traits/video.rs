use crate::sql::error::SqlError;
use crate::sql::query::Queries;
use crate::sql::schema::VideoWithUserWrapper;

use async_trait::async_trait;
use reel_feed::FeedCursor;
use reel_types::{Video, VideoWithUser};
use sqlx::{postgres::PgQueryResult, Pool, Postgres};
use std::result::Result::Ok;

#[async_trait]
pub trait VideoSqlLogic {
    async fn insert_video(pool: &Pool<Postgres>, video: &Video) -> Result<PgQueryResult, SqlError> {
        let query = Queries::InsertVideo.get_query();

        let query_result = sqlx::query(&query.sql)
            .bind(&video.id)
            .bind(&video.user_id)
            .bind(&video.video_url)
            .bind(&video.thumbnail_url)
            .bind(&video.caption)
            .bind(&video.sound_name)
            .bind(video.likes_count)
            .bind(video.comments_count)
            .bind(video.views_count)
            .bind(video.created_at)
            .execute(pool)
            .await?;

        Ok(query_result)
    }

    async fn get_video(pool: &Pool<Postgres>, id: &str) -> Result<Option<VideoWithUser>, SqlError> {
        let query = Queries::GetVideo.get_query();

        let row: Option<VideoWithUserWrapper> = sqlx::query_as(&query.sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|wrapper| wrapper.0))
    }

    async fn get_videos_by_user(
        pool: &Pool<Postgres>,
        user_id: &str,
    ) -> Result<Vec<VideoWithUser>, SqlError> {
        let query = Queries::GetVideosByUser.get_query();

        let rows: Vec<VideoWithUserWrapper> = sqlx::query_as(&query.sql)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(|wrapper| wrapper.0).collect())
    }

    /// One keyset read for the feed: rows strictly past `boundary` in
    /// `(created_at DESC, id DESC)` order, at most `fetch_limit` of them.
    /// The page-assembly policy on top of this lives in `reel_feed`.
    async fn get_video_feed_page(
        pool: &Pool<Postgres>,
        boundary: Option<&FeedCursor>,
        fetch_limit: i64,
    ) -> Result<Vec<VideoWithUser>, SqlError> {
        let query = Queries::GetVideoFeedPage.get_query();

        let rows: Vec<VideoWithUserWrapper> = sqlx::query_as(&query.sql)
            .bind(boundary.map(|cursor| cursor.created_at))
            .bind(boundary.map(|cursor| cursor.id.as_str()))
            .bind(fetch_limit)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(|wrapper| wrapper.0).collect())
    }

    async fn increment_video_views(
        pool: &Pool<Postgres>,
        id: &str,
    ) -> Result<PgQueryResult, SqlError> {
        let query = Queries::IncrementVideoViews.get_query();

        let query_result = sqlx::query(&query.sql).bind(id).execute(pool).await?;

        Ok(query_result)
    }
}
