use crate::api::routes::{
    get_comment_router, get_health_router, get_like_router, get_user_router, get_video_router,
};
use crate::api::state::AppState;
use anyhow::Result;
use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

const ROUTE_PREFIX: &str = "/api";

/// Create the main router for the application
///
/// This function creates the main router for the application by merging all the sub-routers
/// and adding the necessary middleware.
///
/// # Parameters
/// - `app_state` - The application state shared across all handlers
///
/// # Returns
///
/// The main router for the application
pub async fn create_router(app_state: Arc<AppState>) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_credentials(true)
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    let health_routes = get_health_router(ROUTE_PREFIX).await?;
    let video_routes = get_video_router(ROUTE_PREFIX).await?;
    let user_routes = get_user_router(ROUTE_PREFIX).await?;
    let comment_routes = get_comment_router(ROUTE_PREFIX).await?;
    let like_routes = get_like_router(ROUTE_PREFIX).await?;

    let merged_routes = Router::new()
        .merge(video_routes)
        .merge(user_routes)
        .merge(comment_routes)
        .merge(like_routes);

    Ok(Router::new()
        .merge(merged_routes)
        .merge(health_routes)
        .layer(cors)
        .with_state(app_state))
}
