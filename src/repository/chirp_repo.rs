//! Chirp repository (贴文数据访问)

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppError, models::chirp::Chirp};

/// 列表排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

pub struct ChirpRepository {
    db: PgPool,
}

impl ChirpRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 创建贴文
    pub async fn create(&self, user_id: Uuid, body: &str) -> Result<Chirp, AppError> {
        let chirp = sqlx::query_as::<_, Chirp>(
            r#"
            INSERT INTO chirps (id, created_at, updated_at, user_id, body)
            VALUES (gen_random_uuid(), NOW(), NOW(), $1, $2)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(body)
        .fetch_one(&self.db)
        .await?;

        Ok(chirp)
    }

    /// 列出全部贴文
    pub async fn list(&self, order: SortOrder) -> Result<Vec<Chirp>, AppError> {
        let query = match order {
            SortOrder::Ascending => "SELECT * FROM chirps ORDER BY created_at ASC",
            SortOrder::Descending => "SELECT * FROM chirps ORDER BY created_at DESC",
        };

        let chirps = sqlx::query_as::<_, Chirp>(query).fetch_all(&self.db).await?;

        Ok(chirps)
    }

    /// 列出指定作者的贴文
    pub async fn list_by_author(
        &self,
        user_id: Uuid,
        order: SortOrder,
    ) -> Result<Vec<Chirp>, AppError> {
        let query = match order {
            SortOrder::Ascending => {
                "SELECT * FROM chirps WHERE user_id = $1 ORDER BY created_at ASC"
            }
            SortOrder::Descending => {
                "SELECT * FROM chirps WHERE user_id = $1 ORDER BY created_at DESC"
            }
        };

        let chirps = sqlx::query_as::<_, Chirp>(query)
            .bind(user_id)
            .fetch_all(&self.db)
            .await?;

        Ok(chirps)
    }

    /// 根据 ID 查找贴文
    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<Chirp>, AppError> {
        let chirp = sqlx::query_as::<_, Chirp>("SELECT * FROM chirps WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(chirp)
    }

    /// 删除贴文
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
