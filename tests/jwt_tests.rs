//! JWT 服务单元测试
//!
//! 测试访问令牌的签发与验证

use chirpy::auth::jwt::JwtService;
use chirpy::auth::AuthError;
use chrono::Duration;
use uuid::Uuid;

mod common;

fn create_test_service() -> JwtService {
    JwtService::from_config(&common::create_test_config()).expect("JWT service should be created")
}

#[test]
fn test_jwt_service_creation() {
    let config = common::create_test_config();
    let service = JwtService::from_config(&config);

    assert!(service.is_ok(), "JWT service should be created successfully");
    assert_eq!(service.unwrap().access_token_exp_secs(), 3600);
}

#[test]
fn test_jwt_service_secret_too_short() {
    let result = JwtService::new("short", 3600);
    assert!(result.is_err(), "Short secret should fail");
}

#[test]
fn test_issue_and_validate_roundtrip() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let token = service
        .issue(&user_id, Duration::hours(1))
        .expect("Token issuance should succeed");

    let validated = service.validate(&token).expect("Token validation should succeed");

    assert_eq!(validated, user_id);
}

#[test]
fn test_access_token_uses_configured_ttl() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let token = service
        .issue_access_token(&user_id)
        .expect("Token issuance should succeed");

    assert_eq!(service.validate(&token).unwrap(), user_id);
}

#[test]
fn test_token_structure() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let token = service.issue(&user_id, Duration::hours(1)).unwrap();

    // Token 应该是三个部分用点分隔
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3, "JWT should have 3 parts");
    assert!(!token.is_empty());
}

#[test]
fn test_expired_token_rejected() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    // 签发时就已过期一小时
    let token = service.issue(&user_id, Duration::hours(-1)).unwrap();

    assert!(
        matches!(service.validate(&token), Err(AuthError::Expired)),
        "Expired token should fail with Expired"
    );
}

#[test]
fn test_wrong_secret_rejected() {
    let issuer = JwtService::new("first_secret_key_32_characters_ok!!", 3600).unwrap();
    let validator = JwtService::new("other_secret_key_32_characters_ok!!", 3600).unwrap();
    let user_id = Uuid::new_v4();

    let token = issuer.issue(&user_id, Duration::hours(1)).unwrap();

    assert!(
        matches!(validator.validate(&token), Err(AuthError::InvalidSignature)),
        "Cross-secret validation should fail with InvalidSignature"
    );
}

#[test]
fn test_token_tampering_detection() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let token = service.issue(&user_id, Duration::hours(1)).unwrap();

    // 逐个位置替换一个字符，任何改动都应导致验证失败
    for position in [0, token.len() / 2, token.len() - 1] {
        let mut tampered: Vec<char> = token.chars().collect();
        tampered[position] = if tampered[position] == 'a' { 'b' } else { 'a' };
        let tampered: String = tampered.into_iter().collect();

        assert!(
            service.validate(&tampered).is_err(),
            "Tampered token (position {}) should be invalid",
            position
        );
    }
}

#[test]
fn test_invalid_token_fails() {
    let service = create_test_service();

    // 完全无效的 token
    assert!(service.validate("invalid").is_err());
    assert!(service.validate("not.a.token").is_err());
    assert!(service.validate("a.b.c").is_err());

    // 空字符串
    assert!(service.validate("").is_err());
}

#[test]
fn test_prepending_garbage_rejected() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let token = service.issue(&user_id, Duration::hours(1)).unwrap();
    let modified = format!("garbage{}", token);

    assert!(service.validate(&modified).is_err());
}
