//! 管理端点处理器
//! 提供 /admin/metrics 和 /admin/reset 端点

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::middleware::AppState;

/// 指标响应
#[derive(Serialize)]
pub struct MetricsResponse {
    /// API 请求命中计数（自启动或上次重置以来）
    pub hits: i64,
    pub db_pool_size: u32,
    pub db_pool_idle: u32,
    pub process_uptime_secs: u64,
}

/// 指标暴露端点
pub async fn metrics(State(state): State<Arc<AppState>>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        hits: state.hits.load(Ordering::Relaxed),
        db_pool_size: state.db.size(),
        db_pool_idle: state.db.num_idle() as u32,
        process_uptime_secs: crate::handlers::health::get_uptime(),
    })
}

/// 重置命中计数
pub async fn reset(State(state): State<Arc<AppState>>) -> Json<MetricsResponse> {
    state.hits.store(0, Ordering::Relaxed);

    tracing::info!("Hit counter reset");

    Json(MetricsResponse {
        hits: 0,
        db_pool_size: state.db.size(),
        db_pool_idle: state.db.num_idle() as u32,
        process_uptime_secs: crate::handlers::health::get_uptime(),
    })
}
