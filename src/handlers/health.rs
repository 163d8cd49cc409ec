//! 健康检查处理器
//! /api/healthz 存活探针与 /api/readyz 就绪探针

use axum::{extract::State, Json};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::{db, middleware::AppState};

/// 进程启动时刻，在 main 里设置一次
static STARTED_AT: OnceCell<Instant> = OnceCell::new();

pub fn set_start_time() {
    let _ = STARTED_AT.set(Instant::now());
}

/// 进程运行秒数；未初始化时返回 0
pub fn get_uptime() -> u64 {
    STARTED_AT.get().map_or(0, |t| t.elapsed().as_secs())
}

/// 存活探针响应
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// 就绪探针响应
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: DependencyCheck,
}

/// 单项依赖检查结果
#[derive(Serialize)]
pub struct DependencyCheck {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 存活探针，不触达任何依赖
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: get_uptime(),
    })
}

/// 就绪探针：对数据库执行一次 ping
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> Json<ReadinessResponse> {
    let database = match db::ping(&state.db).await {
        Ok(latency) => DependencyCheck {
            status: "healthy".to_string(),
            latency_ms: Some(latency.as_millis() as u64),
            message: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Database readiness check failed");
            DependencyCheck {
                status: "unhealthy".to_string(),
                latency_ms: None,
                message: Some(e.to_string()),
            }
        }
    };

    Json(ReadinessResponse {
        ready: database.status == "healthy",
        database,
    })
}
