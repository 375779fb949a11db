use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::analytics::generator;
use crate::models::models::{AnalyticsReport, Platform, UserView, Video};
use crate::service::state::AppState;
use crate::store::accounts::StoreError;

/// Everything a handler can fail with. Each variant maps to one HTTP status
/// and a `{success:false, message}` JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid username or password")]
    BadCredentials,
    #[error("user not found")]
    UserNotFound,
    #[error("user or platform not found")]
    PlatformNotFound,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::BadCredentials => ApiError::BadCredentials,
            StoreError::UserNotFound => ApiError::UserNotFound,
            StoreError::PlatformNotFound => ApiError::PlatformNotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadCredentials => StatusCode::UNAUTHORIZED,
            ApiError::UserNotFound | ApiError::PlatformNotFound => StatusCode::NOT_FOUND,
        };
        let body = Json(json!({ "success": false, "message": self.to_string() }));
        (status, body).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

/// Liveness probe for the dashboard frontend.
pub async fn get_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Darkroom backend is running and ready for work.".to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserView,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .store
        .authenticate(&payload.username, &payload.password)
        .await?;
    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectResponse {
    pub success: bool,
    pub connected_accounts: HashMap<Platform, bool>,
}

/// Toggles the connection flag for the platform in the path. An unknown
/// platform name is a 404, same as an unknown user.
pub async fn connect_platform(
    State(state): State<Arc<AppState>>,
    Path(platform): Path<String>,
    Json(payload): Json<ConnectRequest>,
) -> Result<Json<ConnectResponse>, ApiError> {
    let platform: Platform = platform.parse().map_err(|_| ApiError::PlatformNotFound)?;
    let connected_accounts = state
        .store
        .toggle_connection(&payload.username, platform)
        .await?;
    Ok(Json(ConnectResponse {
        success: true,
        connected_accounts,
    }))
}

#[derive(Debug, Serialize)]
pub struct VideoListResponse {
    pub success: bool,
    pub videos: Vec<Video>,
}

pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<VideoListResponse>, ApiError> {
    let videos = state.store.list_videos(&username).await?;
    Ok(Json(VideoListResponse {
        success: true,
        videos,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub username: String,
    pub title: String,
    pub description: String,
    pub platforms: Vec<Platform>,
}

pub async fn publish_video(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PublishRequest>,
) -> Result<Json<VideoListResponse>, ApiError> {
    let videos = state
        .store
        .publish_video(
            &payload.username,
            payload.title,
            payload.description,
            payload.platforms,
        )
        .await?;
    Ok(Json(VideoListResponse {
        success: true,
        videos,
    }))
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    pub data: AnalyticsReport,
}

/// Regenerates the synthetic report from scratch on every call; nothing is
/// cached between requests.
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let videos = state.store.videos_snapshot(&username).await?;
    let data = generator::generate(&mut rand::rng(), &videos);
    info!(username = %username, "generated analytics report");
    Ok(Json(AnalyticsResponse {
        success: true,
        data,
    }))
}
