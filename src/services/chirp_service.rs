//! 贴文服务：创建、查询、删除与内容清洗

use once_cell::sync::Lazy;
use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::chirp::{Chirp, ListChirpsQuery},
    repository::chirp_repo::{ChirpRepository, SortOrder},
};

/// 贴文最大长度（字节）
pub const MAX_CHIRP_LENGTH: usize = 140;

/// 需要屏蔽的词（按空格分词后逐词小写比较，带标点的词不命中）
static BANNED_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["kerfuffle", "sharbert", "fornax"].into_iter().collect());

pub struct ChirpService {
    db: PgPool,
}

impl ChirpService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 创建贴文（已通过认证的用户）
    pub async fn create(&self, user_id: Uuid, body: &str) -> Result<Chirp, AppError> {
        let cleaned = validate_chirp(body)?;

        let repo = ChirpRepository::new(self.db.clone());
        let chirp = repo.create(user_id, &cleaned).await?;

        tracing::debug!(chirp_id = %chirp.id, user_id = %user_id, "Chirp created");

        Ok(chirp)
    }

    /// 列出贴文，支持按作者过滤与排序
    pub async fn list(&self, query: &ListChirpsQuery) -> Result<Vec<Chirp>, AppError> {
        let order = match query.sort.as_deref() {
            Some("desc") => SortOrder::Descending,
            _ => SortOrder::Ascending,
        };

        let repo = ChirpRepository::new(self.db.clone());

        match &query.author_id {
            Some(raw) => {
                let author_id = Uuid::parse_str(raw).map_err(|_| {
                    AppError::BadRequest("author_id must be a valid UUID".to_string())
                })?;
                repo.list_by_author(author_id, order).await
            }
            None => repo.list(order).await,
        }
    }

    /// 根据 ID 获取贴文
    pub async fn get(&self, id: &Uuid) -> Result<Chirp, AppError> {
        let repo = ChirpRepository::new(self.db.clone());

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("chirp".to_string()))
    }

    /// 删除贴文，仅作者本人可删除
    pub async fn delete(&self, user_id: Uuid, chirp_id: Uuid) -> Result<(), AppError> {
        let repo = ChirpRepository::new(self.db.clone());

        let chirp = repo
            .find_by_id(&chirp_id)
            .await?
            .ok_or_else(|| AppError::NotFound("chirp".to_string()))?;

        // 已认证但非作者：403，与 401 区分
        if chirp.user_id != user_id {
            tracing::warn!(chirp_id = %chirp_id, user_id = %user_id, "Chirp delete denied");
            return Err(AppError::Forbidden);
        }

        let deleted = repo.delete(chirp.id).await?;
        if !deleted {
            return Err(AppError::NotFound("chirp".to_string()));
        }

        Ok(())
    }
}

/// 校验贴文内容并返回清洗后的文本
pub fn validate_chirp(body: &str) -> Result<String, AppError> {
    if body.len() > MAX_CHIRP_LENGTH {
        return Err(AppError::BadRequest("Chirp is too long".to_string()));
    }

    Ok(clean_body(body))
}

fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if BANNED_WORDS.contains(word.to_lowercase().as_str()) {
                "****"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
