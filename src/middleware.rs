//! HTTP 中间件
//! 应用状态、请求跟踪、命中计数

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// 应用状态
///
/// 服务以 Arc 共享给所有请求；进程内唯一的可变状态是命中计数器，
/// 按显式注入持有而不是包级单例。
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::AppConfig,
    pub db: sqlx::PgPool,
    pub auth_service: Arc<crate::services::AuthService>,
    pub chirp_service: Arc<crate::services::ChirpService>,
    pub jwt_service: Arc<crate::auth::jwt::JwtService>,
    /// API 请求命中计数，供 /admin 端点读取与重置
    pub hits: Arc<AtomicI64>,
}

impl AppState {
    /// 从配置与连接池组装全部服务
    pub fn build(
        config: crate::config::AppConfig,
        db: sqlx::PgPool,
    ) -> Result<Arc<Self>, crate::error::AppError> {
        let jwt_service = Arc::new(crate::auth::jwt::JwtService::from_config(&config)?);

        let auth_service = Arc::new(crate::services::AuthService::new(
            db.clone(),
            jwt_service.clone(),
            Arc::new(config.clone()),
        ));
        let chirp_service = Arc::new(crate::services::ChirpService::new(db.clone()));

        Ok(Arc::new(Self {
            config,
            db,
            auth_service,
            chirp_service,
            jwt_service,
            hits: Arc::new(AtomicI64::new(0)),
        }))
    }
}

/// 请求跟踪中间件
///
/// 为每个请求建立携带 trace_id/request_id 的 span，记录时延指标，
/// 并把两个 id 回写到响应头。trace_id 优先沿用上游传入的值。
pub async fn request_tracking_middleware(req: Request, next: Next) -> Response {
    let trace_id = req
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let span = tracing::info_span!(
        "http_request",
        trace_id = %trace_id,
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    async move {
        let started = Instant::now();

        let mut response = next.run(req).await;

        let elapsed = started.elapsed();
        let status = response.status().as_u16();

        metrics::counter!(
            "http_requests_total",
            "method" => method.to_string(),
            "status" => status.to_string()
        )
        .increment(1);
        metrics::histogram!("http_request_duration_seconds").record(elapsed.as_secs_f64());

        tracing::info!(
            status,
            elapsed_ms = elapsed.as_millis() as u64,
            "Request completed"
        );

        if let Ok(value) = HeaderValue::from_str(&trace_id) {
            response.headers_mut().insert("x-trace-id", value);
        }
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert("x-request-id", value);
        }

        response
    }
    .instrument(span)
    .await
}

/// 命中计数中间件
pub async fn hit_counter_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    state.hits.fetch_add(1, Ordering::Relaxed);

    next.run(req).await
}
