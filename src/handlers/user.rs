//! 用户管理的 HTTP 处理器

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use secrecy::ExposeSecret;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::credentials,
    auth::middleware::AuthContext,
    auth::password::PasswordHasher,
    error::AppError,
    middleware::AppState,
    models::user::{
        CreateUserRequest, MembershipEvent, UpdateCredentialsRequest, UserResponse,
        EVENT_USER_UPGRADED,
    },
    repository::UserRepository,
};

/// 注册用户
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    // 哈希密码；明文不落库也不写日志
    let hasher = PasswordHasher::new();
    let password_hash = hasher.hash(&req.password)?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo.create(&req.email, &password_hash).await?;

    tracing::info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// 更新当前用户的邮箱与密码
pub async fn update_credentials(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Json(req): Json<UpdateCredentialsRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    let hasher = PasswordHasher::new();
    let password_hash = hasher.hash(&req.password)?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .update_credentials(auth_context.user_id, &req.email, &password_hash)
        .await?
        .ok_or_else(|| AppError::NotFound("user".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

/// 会员升级回调（支付服务商）
///
/// 使用 Authorization: ApiKey 头认证；未配置密钥时一律拒绝。
pub async fn upgrade_membership(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<MembershipEvent>,
) -> Result<impl IntoResponse, AppError> {
    let provided_key = credentials::api_key(&headers)?;

    let expected_key = match &state.config.security.polka_api_key {
        Some(key) => key.expose_secret(),
        None => {
            tracing::warn!("Membership webhook called but polka_api_key is not configured");
            return Err(AppError::Unauthorized);
        }
    };

    if provided_key != expected_key.as_str() {
        tracing::warn!("Invalid membership webhook API key");
        return Err(AppError::Unauthorized);
    }

    // 其他事件直接确认，不做处理
    if req.event != EVENT_USER_UPGRADED {
        return Ok(StatusCode::NO_CONTENT);
    }

    let user_id = Uuid::parse_str(&req.data.user_id)
        .map_err(|_| AppError::BadRequest("user_id must be a valid UUID".to_string()))?;

    let repo = UserRepository::new(state.db.clone());
    let upgraded = repo.upgrade_membership(user_id).await?;
    if !upgraded {
        return Err(AppError::NotFound("user".to_string()));
    }

    tracing::info!(user_id = %user_id, "User membership upgraded");

    Ok(StatusCode::NO_CONTENT)
}
