use chrono::{DateTime, Utc};
use reel_feed::FeedItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A creator profile. Counters are denormalized aggregates maintained by the
/// write paths that touch them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub followers_count: i32,
    pub following_count: i32,
    pub likes_count: i32,
}

impl User {
    pub fn new(username: String, avatar_url: Option<String>, bio: Option<String>) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            username,
            avatar_url,
            bio,
            followers_count: 0,
            following_count: 0,
            likes_count: 0,
        }
    }
}

/// A single uploaded video. `created_at` together with `id` defines the feed
/// order; everything else is payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub user_id: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub sound_name: Option<String>,
    pub likes_count: i32,
    pub comments_count: i32,
    pub views_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Video {
    /// Build a new video record with zeroed counters and a server-assigned
    /// id and timestamp.
    pub fn new(
        user_id: String,
        video_url: String,
        thumbnail_url: Option<String>,
        caption: Option<String>,
        sound_name: Option<String>,
    ) -> Self {
        Video {
            id: Uuid::new_v4().to_string(),
            user_id,
            video_url,
            thumbnail_url,
            caption,
            sound_name,
            likes_count: 0,
            comments_count: 0,
            views_count: 0,
            created_at: Utc::now(),
        }
    }
}

/// A video with its creator's profile inlined, which is the shape every
/// read endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoWithUser {
    #[serde(flatten)]
    pub video: Video,
    pub user: User,
}

impl FeedItem for Video {
    fn feed_id(&self) -> &str {
        &self.id
    }

    fn feed_created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl FeedItem for VideoWithUser {
    fn feed_id(&self) -> &str {
        &self.video.id
    }

    fn feed_created_at(&self) -> DateTime<Utc> {
        self.video.created_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub video_id: String,
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(video_id: String, user_id: String, text: String) -> Self {
        Comment {
            id: Uuid::new_v4().to_string(),
            video_id,
            user_id,
            text,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentWithUser {
    #[serde(flatten)]
    pub comment: Comment,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: String,
    pub video_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(video_id: String, user_id: String) -> Self {
        Like {
            id: Uuid::new_v4().to_string(),
            video_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_wire_format_is_camel_case() {
        let user = User::new("chef_42".to_string(), None, Some("Cooking daily".to_string()));
        let video = Video::new(
            user.id.clone(),
            "https://cdn.reel.dev/v/abc.mp4".to_string(),
            None,
            Some("5-minute meal".to_string()),
            Some("Kitchen Beats".to_string()),
        );

        let value = serde_json::to_value(VideoWithUser { video, user }).unwrap();

        assert!(value.get("videoUrl").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("user").unwrap().get("followersCount").is_some());
        // flattened, not nested under "video"
        assert!(value.get("video").is_none());
    }

    #[test]
    fn test_new_video_has_zeroed_counters() {
        let video = Video::new(
            "user-1".to_string(),
            "https://cdn.reel.dev/v/abc.mp4".to_string(),
            None,
            None,
            None,
        );
        assert_eq!(video.likes_count, 0);
        assert_eq!(video.comments_count, 0);
        assert_eq!(video.views_count, 0);
    }
}
