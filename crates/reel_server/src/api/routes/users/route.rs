use crate::api::state::AppState;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use reel_sql::sql::traits::UserSqlLogic;
use reel_sql::PostgresClient;
use reel_types::{CreateUserRequest, ReelServerError, User};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{info, instrument};

#[instrument(skip_all)]
pub async fn get_user(
    State(data): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, (StatusCode, Json<ReelServerError>)> {
    let user = PostgresClient::get_user(&data.db_pool, &id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::get_user_error(e)),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(ReelServerError::user_not_found()),
        ))?;

    Ok(Json(user))
}

#[instrument(skip_all)]
pub async fn create_user(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), (StatusCode, Json<ReelServerError>)> {
    let existing = PostgresClient::get_user_by_username(&data.db_pool, &body.username)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::create_user_error(e)),
            )
        })?;

    if existing.is_some() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ReelServerError::username_taken()),
        ));
    }

    let user = User::new(body.username, body.avatar_url, body.bio);

    PostgresClient::insert_user(&data.db_pool, &user)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReelServerError::create_user_error(e)),
            )
        })?;

    info!("User {} created successfully", user.username);
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip_all)]
pub async fn get_user_router(prefix: &str) -> Result<Router<Arc<AppState>>> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        Router::new()
            .route(&format!("{prefix}/users"), post(create_user))
            .route(&format!("{prefix}/users/{{id}}"), get(get_user))
    }));

    match result {
        Ok(router) => Ok(router),
        Err(_) => {
            // panic
            Err(anyhow::anyhow!("Failed to create user router"))
                .context("Panic occurred while creating the router")
        }
    }
}
