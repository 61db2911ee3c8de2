use crate::sql::error::SqlError;
use crate::sql::query::Queries;
use crate::sql::schema::LikeWrapper;

use async_trait::async_trait;
use reel_types::Like;
use sqlx::{Pool, Postgres, Row};
use std::result::Result::Ok;

#[async_trait]
pub trait LikeSqlLogic {
    async fn get_like_by_user_and_video(
        pool: &Pool<Postgres>,
        user_id: &str,
        video_id: &str,
    ) -> Result<Option<Like>, SqlError> {
        let query = Queries::GetLikeByUserAndVideo.get_query();

        let row: Option<LikeWrapper> = sqlx::query_as(&query.sql)
            .bind(user_id)
            .bind(video_id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|wrapper| wrapper.0))
    }

    /// Inserts the like and bumps the video's like count in one transaction.
    async fn insert_like(pool: &Pool<Postgres>, like: &Like) -> Result<(), SqlError> {
        let insert = Queries::InsertLike.get_query();
        let bump = Queries::IncrementVideoLikes.get_query();

        let mut tx = pool.begin().await?;

        sqlx::query(&insert.sql)
            .bind(&like.id)
            .bind(&like.video_id)
            .bind(&like.user_id)
            .bind(like.created_at)
            .execute(&mut *tx)
            .await?;

        sqlx::query(&bump.sql)
            .bind(&like.video_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Removes the like and decrements the video's like count (never below
    /// zero). Deleting an unknown id is a no-op.
    async fn delete_like(pool: &Pool<Postgres>, id: &str) -> Result<(), SqlError> {
        let delete = Queries::DeleteLike.get_query();
        let drop = Queries::DecrementVideoLikes.get_query();

        let mut tx = pool.begin().await?;

        let deleted = sqlx::query(&delete.sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(row) = deleted {
            let video_id: String = row.try_get("video_id")?;
            sqlx::query(&drop.sql)
                .bind(&video_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
