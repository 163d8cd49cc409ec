//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::{handlers, middleware::AppState};

/// 请求体上限；贴文正文本身限 140 字节，这里只挡异常大的请求
const MAX_BODY_BYTES: usize = 16 * 1024;

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（健康检查、注册、登录、会话操作、贴文读取）
    let public_routes = Router::new()
        .route("/api/healthz", get(handlers::health::health_check))
        .route("/api/readyz", get(handlers::health::readiness_check))
        .route("/api/users", post(handlers::user::create_user))
        .route("/api/login", post(handlers::auth::login))
        .route("/api/refresh", post(handlers::auth::refresh))
        .route("/api/revoke", post(handlers::auth::revoke))
        .route("/api/chirps", get(handlers::chirp::list_chirps))
        .route("/api/chirps/{id}", get(handlers::chirp::get_chirp))
        // 支付回调使用 ApiKey 头认证，在 handler 内校验
        .route("/api/polka/webhooks", post(handlers::user::upgrade_membership));

    // 需要认证的路由
    let authenticated_routes = Router::new()
        .route("/api/users", put(handlers::user::update_credentials))
        .route("/api/chirps", post(handlers::chirp::create_chirp))
        .route("/api/chirps/{id}", delete(handlers::chirp::delete_chirp))
        .layer(axum::middleware::from_fn_with_state(
            state.jwt_service.clone(),
            crate::auth::middleware::jwt_auth_middleware,
        ));

    // 管理端点
    let admin_routes = Router::new()
        .route("/admin/metrics", get(handlers::admin::metrics))
        .route("/admin/reset", post(handlers::admin::reset));

    // 组合所有路由
    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .merge(admin_routes)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::hit_counter_middleware,
        ))
        .layer(axum::middleware::from_fn(crate::middleware::request_tracking_middleware))
        .with_state(state)
}
