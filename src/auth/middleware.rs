//! JWT 认证中间件

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    auth::{credentials, jwt::JwtService},
    error::AppError,
};

/// 认证上下文（附加到请求扩展）
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user_id: Uuid,
}

// 实现 FromRequestParts 以便在 handler 中直接提取 AuthContext
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .copied()
            .ok_or(AppError::Unauthorized)
    }
}

/// JWT 认证中间件 - 必须认证
///
/// 提取 Bearer 令牌并验证签名与过期时间；任何失败都在进入业务
/// handler（以及任何持久化访问）之前拒绝请求。
pub async fn jwt_auth_middleware(
    State(jwt_service): State<Arc<JwtService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 从 Authorization 头提取令牌
    let token = credentials::bearer_token(req.headers())?;

    // 验证令牌
    let user_id = jwt_service.validate(&token)?;

    // 附加到请求扩展
    req.extensions_mut().insert(AuthContext { user_id });

    Ok(next.run(req).await)
}
