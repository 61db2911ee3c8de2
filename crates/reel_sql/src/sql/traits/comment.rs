use crate::sql::error::SqlError;
use crate::sql::query::Queries;
use crate::sql::schema::CommentWithUserWrapper;

use async_trait::async_trait;
use reel_types::{Comment, CommentWithUser};
use sqlx::{Pool, Postgres};
use std::result::Result::Ok;

#[async_trait]
pub trait CommentSqlLogic {
    /// Inserts the comment and bumps the video's denormalized comment count
    /// in one transaction so the counter cannot drift from the rows.
    async fn insert_comment(pool: &Pool<Postgres>, comment: &Comment) -> Result<(), SqlError> {
        let insert = Queries::InsertComment.get_query();
        let bump = Queries::IncrementVideoComments.get_query();

        let mut tx = pool.begin().await?;

        sqlx::query(&insert.sql)
            .bind(&comment.id)
            .bind(&comment.video_id)
            .bind(&comment.user_id)
            .bind(&comment.text)
            .bind(comment.created_at)
            .execute(&mut *tx)
            .await?;

        sqlx::query(&bump.sql)
            .bind(&comment.video_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn get_comments_by_video(
        pool: &Pool<Postgres>,
        video_id: &str,
    ) -> Result<Vec<CommentWithUser>, SqlError> {
        let query = Queries::GetCommentsByVideo.get_query();

        let rows: Vec<CommentWithUserWrapper> = sqlx::query_as(&query.sql)
            .bind(video_id)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(|wrapper| wrapper.0).collect())
    }
}
