//! 错误处理单元测试
//!
//! 测试应用错误类型的各种行为

use axum::http::StatusCode;
use chirpy::auth::AuthError;
use chirpy::error::AppError;

// ==================== 错误状态码测试 ====================

#[test]
fn test_error_status_codes() {
    assert_eq!(AppError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(AppError::NotFound("resource".to_string()).status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        AppError::BadRequest("invalid".to_string()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(AppError::Validation("error".to_string()).status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_database_error_status_code() {
    let db_error = sqlx::Error::RowNotFound;
    let app_error = AppError::Database(db_error);
    assert_eq!(app_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_internal_error_status_code() {
    let app_error = AppError::Internal("Something went wrong".to_string());
    assert_eq!(app_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ==================== 用户消息测试 ====================

#[test]
fn test_user_messages_no_sensitive_info() {
    // 数据库错误不应该暴露技术细节
    let db_error = AppError::Database(sqlx::Error::RowNotFound);
    let message = db_error.user_message();
    assert_eq!(message, "Database error occurred");
    assert!(!message.to_lowercase().contains("sqlx"));
    assert!(!message.to_lowercase().contains("row"));

    // 内部错误不应该带出细节
    let internal = AppError::Internal("signing key exploded".to_string());
    assert_eq!(internal.user_message(), "Internal server error");
}

#[test]
fn test_login_failures_are_indistinguishable() {
    // 邮箱不存在与密码错误必须返回完全相同的消息
    let unknown_email = AppError::InvalidCredentials;
    let wrong_password = AppError::InvalidCredentials;

    assert_eq!(unknown_email.user_message(), wrong_password.user_message());
    assert_eq!(unknown_email.status_code(), wrong_password.status_code());
    assert_eq!(unknown_email.user_message(), "Incorrect email or password");
}

// ==================== 认证错误映射测试 ====================

#[test]
fn test_missing_header_is_unauthorized() {
    let app_error = AppError::from(AuthError::MissingHeader);
    assert_eq!(app_error.status_code(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_malformed_header_is_bad_request() {
    // 格式错误属于 bad-request 类，而不是 unauthorized
    let app_error = AppError::from(AuthError::MalformedHeader);
    assert_eq!(app_error.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_token_failures_are_unauthorized() {
    assert_eq!(
        AppError::from(AuthError::InvalidSignature).status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(AppError::from(AuthError::Expired).status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        AppError::from(AuthError::MalformedClaims).status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn test_internal_auth_failures_are_server_faults() {
    assert_eq!(
        AppError::from(AuthError::HashingFailure("oom".to_string())).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::from(AuthError::SigningFailure("bad key".to_string())).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::from(AuthError::TokenGeneration("rng".to_string())).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::from(AuthError::VerificationFailure("bad hash".to_string())).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_forbidden_distinct_from_unauthorized() {
    // 已认证但无权限（403）与未认证（401）必须区分
    assert_ne!(
        AppError::Forbidden.status_code(),
        AppError::Unauthorized.status_code()
    );
}
