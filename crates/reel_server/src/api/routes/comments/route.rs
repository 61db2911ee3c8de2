use crate::api::state::AppState;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use reel_sql::sql::traits::{CommentSqlLogic, UserSqlLogic};
use reel_sql::PostgresClient;
use reel_types::{Comment, CommentWithUser, CreateCommentRequest, ReelServerError};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn get_comments(
    State(data): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<Vec<CommentWithUser>>, (StatusCode, Json<ReelServerError>)> {
    let comments = PostgresClient::get_comments_by_video(&data.db_pool, &video_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::query_comments_error(e)),
            )
        })?;

    Ok(Json(comments))
}

#[instrument(skip_all)]
pub async fn create_comment(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentWithUser>), (StatusCode, Json<ReelServerError>)> {
    let user = PostgresClient::get_user(&data.db_pool, &body.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::create_comment_error(e)),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(ReelServerError::user_not_found()),
        ))?;

    let comment = Comment::new(body.video_id, body.user_id, body.text);

    PostgresClient::insert_comment(&data.db_pool, &comment)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::create_comment_error(e)),
            )
        })?;

    Ok((StatusCode::CREATED, Json(CommentWithUser { comment, user })))
}

#[instrument(skip_all)]
pub async fn get_comment_router(prefix: &str) -> Result<Router<Arc<AppState>>> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        Router::new()
            .route(&format!("{prefix}/comments"), post(create_comment))
            .route(
                &format!("{prefix}/comments/{{video_id}}"),
                get(get_comments),
            )
    }));

    match result {
        Ok(router) => Ok(router),
        Err(_) => {
            // panic
            Err(anyhow::anyhow!("Failed to create comment router"))
                .context("Panic occurred while creating the router")
        }
    }
}
