use crate::api::state::AppState;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use reel_sql::sql::traits::LikeSqlLogic;
use reel_sql::PostgresClient;
use reel_types::{CreateLikeRequest, Like, ReelServerError};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn create_like(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateLikeRequest>,
) -> Result<(StatusCode, Json<Like>), (StatusCode, Json<ReelServerError>)> {
    let existing =
        PostgresClient::get_like_by_user_and_video(&data.db_pool, &body.user_id, &body.video_id)
            .await
            .map_err(|e| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ReelServerError::create_like_error(e)),
                )
            })?;

    if existing.is_some() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ReelServerError::already_liked()),
        ));
    }

    let like = Like::new(body.video_id, body.user_id);

    PostgresClient::insert_like(&data.db_pool, &like)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::create_like_error(e)),
            )
        })?;

    Ok((StatusCode::CREATED, Json(like)))
}

#[instrument(skip_all)]
pub async fn delete_like(
    State(data): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ReelServerError>)> {
    PostgresClient::delete_like(&data.db_pool, &id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::delete_like_error(e)),
            )
        })?;

    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip_all)]
pub async fn get_like_router(prefix: &str) -> Result<Router<Arc<AppState>>> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        Router::new()
            .route(&format!("{prefix}/likes"), post(create_like))
            .route(&format!("{prefix}/likes/{{id}}"), delete(delete_like))
    }));

    match result {
        Ok(router) => Ok(router),
        Err(_) => {
            // panic
            Err(anyhow::anyhow!("Failed to create like router"))
                .context("Panic occurred while creating the router")
        }
    }
}
