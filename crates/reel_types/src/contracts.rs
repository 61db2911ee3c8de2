use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::error;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    pub user_id: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub sound_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub video_id: String,
    pub user_id: String,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateLikeRequest {
    pub video_id: String,
    pub user_id: String,
}

/// Query parameters for `GET /api/videos`. Both are optional; a missing
/// `limit` selects the configured default page size and a missing `cursor`
/// selects the first page.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VideoFeedRequest {
    pub limit: Option<i64>,
    pub cursor: Option<String>,
}

/// Common struct for returning errors from the reel server (axum response)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReelServerError {
    pub error: String,
}

impl ReelServerError {
    pub fn query_videos_error<T: Display>(e: T) -> Self {
        error!("Failed to query videos: {}", e);
        ReelServerError {
            error: "Failed to fetch videos".to_string(),
        }
    }

    pub fn video_not_found() -> Self {
        ReelServerError {
            error: "Video not found".to_string(),
        }
    }

    pub fn create_video_error<T: Display>(e: T) -> Self {
        error!("Failed to create video: {}", e);
        ReelServerError {
            error: "Failed to create video".to_string(),
        }
    }

    pub fn user_not_found() -> Self {
        ReelServerError {
            error: "User not found".to_string(),
        }
    }

    pub fn username_taken() -> Self {
        ReelServerError {
            error: "Username already taken".to_string(),
        }
    }

    pub fn create_user_error<T: Display>(e: T) -> Self {
        error!("Failed to create user: {}", e);
        ReelServerError {
            error: "Failed to create user".to_string(),
        }
    }

    pub fn get_user_error<T: Display>(e: T) -> Self {
        error!("Failed to get user: {}", e);
        ReelServerError {
            error: "Failed to fetch user".to_string(),
        }
    }

    pub fn query_comments_error<T: Display>(e: T) -> Self {
        error!("Failed to query comments: {}", e);
        ReelServerError {
            error: "Failed to fetch comments".to_string(),
        }
    }

    pub fn create_comment_error<T: Display>(e: T) -> Self {
        error!("Failed to create comment: {}", e);
        ReelServerError {
            error: "Failed to create comment".to_string(),
        }
    }

    pub fn already_liked() -> Self {
        ReelServerError {
            error: "Already liked".to_string(),
        }
    }

    pub fn create_like_error<T: Display>(e: T) -> Self {
        error!("Failed to create like: {}", e);
        ReelServerError {
            error: "Failed to create like".to_string(),
        }
    }

    pub fn delete_like_error<T: Display>(e: T) -> Self {
        error!("Failed to delete like: {}", e);
        ReelServerError {
            error: "Failed to delete like".to_string(),
        }
    }
}
