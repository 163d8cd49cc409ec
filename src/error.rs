//! 统一错误模型
//! 错误类型、状态码映射与 JSON 错误响应

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP 状态码
    ///
    /// 归类规则：格式错误 400，认证失败 401，越权 403，
    /// 内部故障一律 500。
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 面向客户端的消息，内部细节一律不带出
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidCredentials => "Incorrect email or password".to_string(),
            AppError::Unauthorized => "Authentication failed".to_string(),
            AppError::Forbidden => "Access denied".to_string(),
            AppError::NotFound(what) => format!("Resource not found: {}", what),
            AppError::BadRequest(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Database(_) => "Database error occurred".to_string(),
            AppError::Config(_) => "Configuration error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// 错误码（与 HTTP 状态码一致）
    pub fn code(&self) -> u16 {
        self.status_code().as_u16()
    }
}

/// 错误响应 DTO，形如 {"error": {code, message, request_id}}
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
    pub request_id: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        // 完整错误细节只进日志；响应体里是脱敏后的消息
        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                request_id = %request_id,
                detail = %self,
                "Request failed"
            );
        } else {
            tracing::warn!(
                status = status.as_u16(),
                request_id = %request_id,
                detail = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: status.as_u16(),
                message: self.user_message(),
                request_id,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// 认证错误到应用错误的映射
/// 格式错误归为 400，凭证/令牌失败归为 401，内部失败归为 500
impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingHeader => AppError::Unauthorized,
            AuthError::MalformedHeader => {
                AppError::BadRequest("Malformed authorization header".to_string())
            }
            AuthError::InvalidSignature | AuthError::Expired | AuthError::MalformedClaims => {
                AppError::Unauthorized
            }
            AuthError::HashingFailure(msg)
            | AuthError::VerificationFailure(msg)
            | AuthError::SigningFailure(msg)
            | AuthError::TokenGeneration(msg) => AppError::Internal(msg),
        }
    }
}
