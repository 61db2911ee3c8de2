use crate::api::state::AppState;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use reel_feed::{fetch_page, FeedPage};
use reel_sql::{PgFeedSource, PostgresClient};
use reel_types::{CreateVideoRequest, ReelServerError, Video, VideoFeedRequest, VideoWithUser};
use reel_sql::sql::traits::{UserSqlLogic, VideoSqlLogic};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{info, instrument};

/// The paginated feed. `limit` falls back to the configured default page
/// size and is clamped to `[1, 50]`; a malformed `cursor` degrades to the
/// first page inside `reel_feed` rather than erroring.
#[instrument(skip_all)]
pub async fn get_video_feed(
    State(data): State<Arc<AppState>>,
    Query(params): Query<VideoFeedRequest>,
) -> Result<Json<FeedPage<VideoWithUser>>, (StatusCode, Json<ReelServerError>)> {
    let limit = params.limit.unwrap_or(data.config.default_page_size);

    let source = PgFeedSource::new(&data.db_pool);
    let page = fetch_page(&source, limit, params.cursor.as_deref())
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::query_videos_error(e)),
            )
        })?;

    Ok(Json(page))
}

/// Fetch one video with its creator. Viewing counts as a view, so the
/// counter is bumped before the read; bumping a missing id is a no-op and
/// the read then 404s.
#[instrument(skip_all)]
pub async fn get_video(
    State(data): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<VideoWithUser>, (StatusCode, Json<ReelServerError>)> {
    PostgresClient::increment_video_views(&data.db_pool, &id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::query_videos_error(e)),
            )
        })?;

    let video = PostgresClient::get_video(&data.db_pool, &id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::query_videos_error(e)),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(ReelServerError::video_not_found()),
        ))?;

    Ok(Json(video))
}

#[instrument(skip_all)]
pub async fn get_user_videos(
    State(data): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<VideoWithUser>>, (StatusCode, Json<ReelServerError>)> {
    let videos = PostgresClient::get_videos_by_user(&data.db_pool, &user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::query_videos_error(e)),
            )
        })?;

    Ok(Json(videos))
}

#[instrument(skip_all)]
pub async fn create_video(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<VideoWithUser>), (StatusCode, Json<ReelServerError>)> {
    let user = PostgresClient::get_user(&data.db_pool, &body.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::create_video_error(e)),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(ReelServerError::user_not_found()),
        ))?;

    let video = Video::new(
        body.user_id,
        body.video_url,
        body.thumbnail_url,
        body.caption,
        body.sound_name,
    );

    PostgresClient::insert_video(&data.db_pool, &video)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::create_video_error(e)),
            )
        })?;

    info!("Video {} created successfully", video.id);
    Ok((StatusCode::CREATED, Json(VideoWithUser { video, user })))
}

#[instrument(skip_all)]
pub async fn get_video_router(prefix: &str) -> Result<Router<Arc<AppState>>> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        Router::new()
            .route(
                &format!("{prefix}/videos"),
                get(get_video_feed).post(create_video),
            )
            .route(
                &format!("{prefix}/videos/user/{{user_id}}"),
                get(get_user_videos),
            )
            .route(&format!("{prefix}/videos/{{id}}"), get(get_video))
    }));

    match result {
        Ok(router) => Ok(router),
        Err(_) => {
            // panic
            Err(anyhow::anyhow!("Failed to create video router"))
                .context("Panic occurred while creating the router")
        }
    }
}
