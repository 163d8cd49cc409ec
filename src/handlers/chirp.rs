//! 贴文的 HTTP 处理器

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::chirp::{CreateChirpRequest, ListChirpsQuery},
};

/// 创建贴文
pub async fn create_chirp(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Json(req): Json<CreateChirpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let chirp = state
        .chirp_service
        .create(auth_context.user_id, &req.body)
        .await?;

    Ok((StatusCode::CREATED, Json(chirp)))
}

/// 列出贴文
pub async fn list_chirps(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListChirpsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let chirps = state.chirp_service.list(&query).await?;

    Ok(Json(chirps))
}

/// 获取单条贴文
pub async fn get_chirp(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let chirp = state.chirp_service.get(&id).await?;

    Ok(Json(chirp))
}

/// 删除贴文（仅作者）
pub async fn delete_chirp(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.chirp_service.delete(auth_context.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
