use crate::sql::error::SqlError;
use crate::sql::query::Queries;
use crate::sql::schema::UserWrapper;

use async_trait::async_trait;
use reel_types::User;
use sqlx::{postgres::PgQueryResult, Pool, Postgres};
use std::result::Result::Ok;

#[async_trait]
pub trait UserSqlLogic {
    async fn insert_user(pool: &Pool<Postgres>, user: &User) -> Result<PgQueryResult, SqlError> {
        let query = Queries::InsertUser.get_query();

        let query_result = sqlx::query(&query.sql)
            .bind(&user.id)
            .bind(&user.username)
            .bind(&user.avatar_url)
            .bind(&user.bio)
            .bind(user.followers_count)
            .bind(user.following_count)
            .bind(user.likes_count)
            .execute(pool)
            .await?;

        Ok(query_result)
    }

    async fn get_user(pool: &Pool<Postgres>, id: &str) -> Result<Option<User>, SqlError> {
        let query = Queries::GetUser.get_query();

        let row: Option<UserWrapper> = sqlx::query_as(&query.sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|wrapper| wrapper.0))
    }

    async fn get_user_by_username(
        pool: &Pool<Postgres>,
        username: &str,
    ) -> Result<Option<User>, SqlError> {
        let query = Queries::GetUserByUsername.get_query();

        let row: Option<UserWrapper> = sqlx::query_as(&query.sql)
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|wrapper| wrapper.0))
    }
}
