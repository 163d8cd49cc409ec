//! Refresh token repository (刷新令牌数据访问)

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppError, models::auth::RefreshToken};

pub struct RefreshTokenRepository {
    db: PgPool,
}

impl RefreshTokenRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 存储刷新令牌
    pub async fn create(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshToken, AppError> {
        let record = sqlx::query_as::<_, RefreshToken>(
            r#"
            INSERT INTO refresh_tokens (token, user_id, created_at, updated_at, expires_at)
            VALUES ($1, $2, NOW(), NOW(), $3)
            RETURNING *
            "#,
        )
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(&self.db)
        .await?;

        Ok(record)
    }

    /// 根据令牌值查找记录
    pub async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, AppError> {
        let record =
            sqlx::query_as::<_, RefreshToken>("SELECT * FROM refresh_tokens WHERE token = $1")
                .bind(token)
                .fetch_optional(&self.db)
                .await?;

        Ok(record)
    }

    /// 撤销刷新令牌
    ///
    /// 对已撤销的令牌再次撤销仍然成功（revoked_at 被重新写入）；
    /// 不存在的令牌返回 false。
    pub async fn revoke(&self, token: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE refresh_tokens SET revoked_at = NOW(), updated_at = NOW() WHERE token = $1",
        )
        .bind(token)
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
