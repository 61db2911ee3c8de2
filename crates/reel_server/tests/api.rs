//! End-to-end tests against the HTTP surface. They expect a running
//! Postgres reachable through `DATABASE_URL`, so they are ignored by
//! default and run with `cargo test -- --ignored`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use reel_feed::FeedPage;
use reel_server::api::routes::Alive;
use reel_server::api::state::AppState;
use reel_server::create_app;
use reel_settings::ReelServerConfig;
use reel_types::{
    CreateCommentRequest, CreateLikeRequest, CreateUserRequest, CreateVideoRequest, Like, User,
    VideoFeedRequest, VideoWithUser,
};
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tower::util::ServiceExt;

pub async fn cleanup(pool: &Pool<Postgres>) -> Result<(), anyhow::Error> {
    sqlx::raw_sql(
        r#"
        DELETE
        FROM likes;

        DELETE
        FROM comments;

        DELETE
        FROM videos;

        DELETE
        FROM users;
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub struct TestHelper {
    app: Router,
    state: Arc<AppState>,
}

impl TestHelper {
    pub async fn new() -> Result<Self, anyhow::Error> {
        let config = ReelServerConfig::default();
        let (app, state) = create_app(config, None).await?;

        cleanup(&state.db_pool).await?;

        Ok(Self { app, state })
    }

    pub async fn send_oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    pub async fn create_user(&self, username: &str) -> User {
        let body = serde_json::to_string(&CreateUserRequest {
            username: username.to_string(),
            avatar_url: None,
            bio: Some("test account".to_string()),
        })
        .unwrap();

        let request = Request::builder()
            .uri("/api/users")
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = self.send_oneshot(request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    pub async fn create_video(&self, user_id: &str, caption: &str) -> VideoWithUser {
        let body = serde_json::to_string(&CreateVideoRequest {
            user_id: user_id.to_string(),
            video_url: "https://cdn.reel.dev/v/test.mp4".to_string(),
            thumbnail_url: None,
            caption: Some(caption.to_string()),
            sound_name: None,
        })
        .unwrap();

        let request = Request::builder()
            .uri("/api/videos")
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = self.send_oneshot(request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    pub async fn fetch_feed(&self, limit: Option<i64>, cursor: Option<String>) -> FeedPage<VideoWithUser> {
        let params = VideoFeedRequest { limit, cursor };
        let query_string = serde_qs::to_string(&params).unwrap();

        let request = Request::builder()
            .uri(format!("/api/videos?{}", query_string))
            .method("GET")
            .body(Body::empty())
            .unwrap();

        let response = self.send_oneshot(request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_health_check() {
    let helper = TestHelper::new().await.unwrap();

    let request = Request::builder()
        .uri("/api/healthcheck")
        .body(Body::empty())
        .unwrap();

    let response = helper.send_oneshot(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();

    let v: Alive = serde_json::from_slice(&body).unwrap();
    assert_eq!(v.status, "Alive");
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_user_lifecycle() {
    let helper = TestHelper::new().await.unwrap();

    let user = helper.create_user("dance_queen").await;
    assert_eq!(user.followers_count, 0);

    // fetch it back
    let request = Request::builder()
        .uri(format!("/api/users/{}", user.id))
        .body(Body::empty())
        .unwrap();
    let response = helper.send_oneshot(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    // duplicate username is rejected
    let body = serde_json::to_string(&CreateUserRequest {
        username: "dance_queen".to_string(),
        avatar_url: None,
        bio: None,
    })
    .unwrap();
    let request = Request::builder()
        .uri("/api/users")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = helper.send_oneshot(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // unknown id 404s
    let request = Request::builder()
        .uri("/api/users/no-such-user")
        .body(Body::empty())
        .unwrap();
    let response = helper.send_oneshot(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_feed_pagination_round_trip() {
    let helper = TestHelper::new().await.unwrap();

    let user = helper.create_user("movie_buff").await;
    for i in 0..12 {
        helper.create_video(&user.id, &format!("clip {}", i)).await;
    }

    let first = helper.fetch_feed(Some(5), None).await;
    assert_eq!(first.items.len(), 5);
    let cursor = first.next_cursor.clone().expect("more pages remain");

    let second = helper.fetch_feed(Some(5), Some(cursor)).await;
    assert_eq!(second.items.len(), 5);
    let cursor = second.next_cursor.clone().expect("one page remains");

    let third = helper.fetch_feed(Some(5), Some(cursor)).await;
    assert_eq!(third.items.len(), 2);
    assert!(third.next_cursor.is_none());

    // no id appears twice across the sequence
    let mut ids: Vec<String> = first
        .items
        .iter()
        .chain(second.items.iter())
        .chain(third.items.iter())
        .map(|v| v.video.id.clone())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 12);

    // limit is clamped, not rejected
    let clamped = helper.fetch_feed(Some(1000), None).await;
    assert_eq!(clamped.items.len(), 12);

    // malformed cursor degrades to the first page
    let degraded = helper
        .fetch_feed(Some(5), Some("garbage".to_string()))
        .await;
    assert_eq!(degraded.items, first.items);
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_video_view_count_increments() {
    let helper = TestHelper::new().await.unwrap();

    let user = helper.create_user("tech_guy").await;
    let video = helper.create_video(&user.id, "unboxing").await;

    let request = Request::builder()
        .uri(format!("/api/videos/{}", video.video.id))
        .body(Body::empty())
        .unwrap();
    let response = helper.send_oneshot(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let fetched: VideoWithUser = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched.video.views_count, 1);

    // unknown video 404s
    let request = Request::builder()
        .uri("/api/videos/no-such-video")
        .body(Body::empty())
        .unwrap();
    let response = helper.send_oneshot(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_comments_bump_video_counter() {
    let helper = TestHelper::new().await.unwrap();

    let user = helper.create_user("chef_19").await;
    let video = helper.create_video(&user.id, "secret ingredient").await;

    let body = serde_json::to_string(&CreateCommentRequest {
        video_id: video.video.id.clone(),
        user_id: user.id.clone(),
        text: "Tutorial please!".to_string(),
    })
    .unwrap();
    let request = Request::builder()
        .uri("/api/comments")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = helper.send_oneshot(request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = Request::builder()
        .uri(format!("/api/comments/{}", video.video.id))
        .body(Body::empty())
        .unwrap();
    let response = helper.send_oneshot(request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let comments: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(comments.len(), 1);

    // the denormalized counter moved with the insert
    let feed = helper.fetch_feed(Some(1), None).await;
    assert_eq!(feed.items[0].video.comments_count, 1);
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_like_and_unlike() {
    let helper = TestHelper::new().await.unwrap();

    let user = helper.create_user("sports_fan").await;
    let video = helper.create_video(&user.id, "game winner").await;

    let like_body = serde_json::to_string(&CreateLikeRequest {
        video_id: video.video.id.clone(),
        user_id: user.id.clone(),
    })
    .unwrap();

    let request = Request::builder()
        .uri("/api/likes")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(like_body.clone()))
        .unwrap();
    let response = helper.send_oneshot(request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let like: Like = serde_json::from_slice(&body).unwrap();

    // double-like rejected
    let request = Request::builder()
        .uri("/api/likes")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(like_body))
        .unwrap();
    let response = helper.send_oneshot(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let feed = helper.fetch_feed(Some(1), None).await;
    assert_eq!(feed.items[0].video.likes_count, 1);

    let request = Request::builder()
        .uri(format!("/api/likes/{}", like.id))
        .method("DELETE")
        .body(Body::empty())
        .unwrap();
    let response = helper.send_oneshot(request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let feed = helper.fetch_feed(Some(1), None).await;
    assert_eq!(feed.items[0].video.likes_count, 0);

    // cleanup so reruns start fresh
    cleanup(&helper.state.db_pool).await.unwrap();
}
