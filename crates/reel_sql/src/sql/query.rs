//constants

const INSERT_USER: &str = include_str!("scripts/insert_user.sql");
const GET_USER: &str = include_str!("scripts/get_user.sql");
const GET_USER_BY_USERNAME: &str = include_str!("scripts/get_user_by_username.sql");
const INSERT_VIDEO: &str = include_str!("scripts/insert_video.sql");
const GET_VIDEO: &str = include_str!("scripts/get_video.sql");
const GET_VIDEOS_BY_USER: &str = include_str!("scripts/get_videos_by_user.sql");
const GET_VIDEO_FEED_PAGE: &str = include_str!("scripts/get_video_feed_page.sql");
const INCREMENT_VIDEO_VIEWS: &str = include_str!("scripts/increment_video_views.sql");
const INSERT_COMMENT: &str = include_str!("scripts/insert_comment.sql");
const GET_COMMENTS_BY_VIDEO: &str = include_str!("scripts/get_comments_by_video.sql");
const INCREMENT_VIDEO_COMMENTS: &str = include_str!("scripts/increment_video_comments.sql");
const INSERT_LIKE: &str = include_str!("scripts/insert_like.sql");
const GET_LIKE_BY_USER_AND_VIDEO: &str = include_str!("scripts/get_like_by_user_and_video.sql");
const DELETE_LIKE: &str = include_str!("scripts/delete_like.sql");
const INCREMENT_VIDEO_LIKES: &str = include_str!("scripts/increment_video_likes.sql");
const DECREMENT_VIDEO_LIKES: &str = include_str!("scripts/decrement_video_likes.sql");

pub enum Queries {
    InsertUser,
    GetUser,
    GetUserByUsername,
    InsertVideo,
    GetVideo,
    GetVideosByUser,
    GetVideoFeedPage,
    IncrementVideoViews,
    InsertComment,
    GetCommentsByVideo,
    IncrementVideoComments,
    InsertLike,
    GetLikeByUserAndVideo,
    DeleteLike,
    IncrementVideoLikes,
    DecrementVideoLikes,
}

impl Queries {
    pub fn get_query(&self) -> SqlQuery {
        match self {
            Queries::InsertUser => SqlQuery::new(INSERT_USER),
            Queries::GetUser => SqlQuery::new(GET_USER),
            Queries::GetUserByUsername => SqlQuery::new(GET_USER_BY_USERNAME),
            Queries::InsertVideo => SqlQuery::new(INSERT_VIDEO),
            Queries::GetVideo => SqlQuery::new(GET_VIDEO),
            Queries::GetVideosByUser => SqlQuery::new(GET_VIDEOS_BY_USER),
            Queries::GetVideoFeedPage => SqlQuery::new(GET_VIDEO_FEED_PAGE),
            Queries::IncrementVideoViews => SqlQuery::new(INCREMENT_VIDEO_VIEWS),
            Queries::InsertComment => SqlQuery::new(INSERT_COMMENT),
            Queries::GetCommentsByVideo => SqlQuery::new(GET_COMMENTS_BY_VIDEO),
            Queries::IncrementVideoComments => SqlQuery::new(INCREMENT_VIDEO_COMMENTS),
            Queries::InsertLike => SqlQuery::new(INSERT_LIKE),
            Queries::GetLikeByUserAndVideo => SqlQuery::new(GET_LIKE_BY_USER_AND_VIDEO),
            Queries::DeleteLike => SqlQuery::new(DELETE_LIKE),
            Queries::IncrementVideoLikes => SqlQuery::new(INCREMENT_VIDEO_LIKES),
            Queries::DecrementVideoLikes => SqlQuery::new(DECREMENT_VIDEO_LIKES),
        }
    }
}

pub struct SqlQuery {
    pub sql: String,
}

impl SqlQuery {
    fn new(sql: &str) -> Self {
        Self {
            sql: sql.to_string(),
        }
    }
}
