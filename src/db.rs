//! PostgreSQL 连接池管理
//! 建池、迁移与就绪探测

use crate::config::DatabaseConfig;
use secrecy::ExposeSecret;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::{Duration, Instant};
use thiserror::Error;

/// 数据库层错误
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// 建立连接池
///
/// 连接参数全部来自 [`DatabaseConfig`]；连接串经 Secret 包装，
/// 不会出现在任何日志里。
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
        .connect(config.url.expose_secret())
        .await
        .map_err(DbError::Connect)?;

    tracing::info!(
        max = config.max_connections,
        min = config.min_connections,
        "Database pool ready"
    );

    Ok(pool)
}

/// 应用 ./migrations 下的全部迁移
pub async fn migrate(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("Database migrations applied");
    Ok(())
}

/// 就绪探测：执行 SELECT 1 并返回耗时
///
/// 每次探测顺带刷新连接池 gauge。
pub async fn ping(pool: &PgPool) -> Result<Duration, sqlx::Error> {
    let started = Instant::now();

    sqlx::query("SELECT 1").execute(pool).await?;
    publish_pool_gauges(pool);

    Ok(started.elapsed())
}

/// 连接池指标
pub fn publish_pool_gauges(pool: &PgPool) {
    metrics::gauge!("db_pool_connections").set(f64::from(pool.size()));
    metrics::gauge!("db_pool_idle").set(pool.num_idle() as f64);
}
