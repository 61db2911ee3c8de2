use reel_types::{Comment, CommentWithUser, Like, User, Video, VideoWithUser};
use sqlx::{postgres::PgRow, Error, FromRow, Row};

pub struct UserWrapper(pub User);

impl<'r> FromRow<'r, PgRow> for UserWrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, Error> {
        Ok(UserWrapper(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            avatar_url: row.try_get("avatar_url")?,
            bio: row.try_get("bio")?,
            followers_count: row.try_get("followers_count")?,
            following_count: row.try_get("following_count")?,
            likes_count: row.try_get("likes_count")?,
        }))
    }
}

/// Pulls the `author_*` aliased columns every joined query selects.
fn author_from_row(row: &PgRow) -> Result<User, Error> {
    Ok(User {
        id: row.try_get("author_id")?,
        username: row.try_get("author_username")?,
        avatar_url: row.try_get("author_avatar_url")?,
        bio: row.try_get("author_bio")?,
        followers_count: row.try_get("author_followers_count")?,
        following_count: row.try_get("author_following_count")?,
        likes_count: row.try_get("author_likes_count")?,
    })
}

pub struct VideoWithUserWrapper(pub VideoWithUser);

impl<'r> FromRow<'r, PgRow> for VideoWithUserWrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, Error> {
        let video = Video {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            video_url: row.try_get("video_url")?,
            thumbnail_url: row.try_get("thumbnail_url")?,
            caption: row.try_get("caption")?,
            sound_name: row.try_get("sound_name")?,
            likes_count: row.try_get("likes_count")?,
            comments_count: row.try_get("comments_count")?,
            views_count: row.try_get("views_count")?,
            created_at: row.try_get("created_at")?,
        };

        Ok(VideoWithUserWrapper(VideoWithUser {
            video,
            user: author_from_row(row)?,
        }))
    }
}

pub struct CommentWithUserWrapper(pub CommentWithUser);

impl<'r> FromRow<'r, PgRow> for CommentWithUserWrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, Error> {
        let comment = Comment {
            id: row.try_get("id")?,
            video_id: row.try_get("video_id")?,
            user_id: row.try_get("user_id")?,
            text: row.try_get("text")?,
            created_at: row.try_get("created_at")?,
        };

        Ok(CommentWithUserWrapper(CommentWithUser {
            comment,
            user: author_from_row(row)?,
        }))
    }
}

pub struct LikeWrapper(pub Like);

impl<'r> FromRow<'r, PgRow> for LikeWrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, Error> {
        Ok(LikeWrapper(Like {
            id: row.try_get("id")?,
            video_id: row.try_get("video_id")?,
            user_id: row.try_get("user_id")?,
            created_at: row.try_get("created_at")?,
        }))
    }
}
