//! 认证服务：登录、令牌刷新、令牌撤销

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::{
    auth::{jwt::JwtService, password::PasswordHasher, refresh},
    config::AppConfig,
    error::AppError,
    models::auth::{LoginRequest, LoginResponse, TokenResponse},
    repository::{refresh_token_repo::RefreshTokenRepository, user_repo::UserRepository},
};

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
    config: Arc<AppConfig>,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_service: Arc<JwtService>, config: Arc<AppConfig>) -> Self {
        Self {
            db,
            jwt_service,
            config,
        }
    }

    /// 用户登录
    ///
    /// 邮箱不存在与密码错误返回同一个错误，避免账号枚举。
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        let user_repo = UserRepository::new(self.db.clone());
        let refresh_repo = RefreshTokenRepository::new(self.db.clone());

        // 获取用户
        let user = user_repo
            .find_by_email(&req.email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // 验证密码
        let hasher = PasswordHasher::new();
        if !hasher.verify(&req.password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        // 生成访问令牌（固定 1 小时有效期，来自配置）
        let token = self.jwt_service.issue_access_token(&user.id)?;

        // 生成并存储刷新令牌（60 天窗口）
        let raw_refresh_token = refresh::generate()?;
        let expires_at = Utc::now() + Duration::days(self.config.security.refresh_token_exp_days);
        let refresh_token = refresh_repo
            .create(&raw_refresh_token, user.id, expires_at)
            .await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
            is_chirpy_red: user.is_chirpy_red,
            token,
            refresh_token: refresh_token.token,
        })
    }

    /// 刷新访问令牌
    ///
    /// 刷新令牌本身不轮换：查找、校验有效性，然后仅签发新的访问令牌。
    pub async fn refresh(&self, raw_token: &str) -> Result<TokenResponse, AppError> {
        let refresh_repo = RefreshTokenRepository::new(self.db.clone());

        let record = refresh_repo
            .find_by_token(raw_token)
            .await?
            .ok_or(AppError::Unauthorized)?;

        // 过期或已撤销的令牌一律拒绝
        if !record.is_valid(Utc::now()) {
            tracing::debug!(user_id = %record.user_id, "Refresh token expired or revoked");
            return Err(AppError::Unauthorized);
        }

        let token = self.jwt_service.issue_access_token(&record.user_id)?;

        tracing::debug!(user_id = %record.user_id, "Access token refreshed");

        Ok(TokenResponse { token })
    }

    /// 撤销刷新令牌
    pub async fn revoke(&self, raw_token: &str) -> Result<(), AppError> {
        let refresh_repo = RefreshTokenRepository::new(self.db.clone());

        let revoked = refresh_repo.revoke(raw_token).await?;
        if !revoked {
            return Err(AppError::Unauthorized);
        }

        tracing::info!("Refresh token revoked");

        Ok(())
    }
}
