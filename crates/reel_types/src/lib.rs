pub mod contracts;
pub mod record;

pub use contracts::{
    CreateCommentRequest, CreateLikeRequest, CreateUserRequest, CreateVideoRequest,
    ReelServerError, VideoFeedRequest,
};
pub use record::{Comment, CommentWithUser, Like, User, Video, VideoWithUser};
