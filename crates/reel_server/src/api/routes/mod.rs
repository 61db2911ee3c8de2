pub mod comments;
pub mod health;
pub mod likes;
pub mod users;
pub mod videos;

pub use comments::{create_comment, get_comment_router, get_comments};
pub use health::{get_health_router, health_check, Alive};
pub use likes::{create_like, delete_like, get_like_router};
pub use users::{create_user, get_user, get_user_router};
pub use videos::{create_video, get_user_videos, get_video, get_video_feed, get_video_router};
