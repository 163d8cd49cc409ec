//! 刷新令牌单元测试
//!
//! 测试令牌生成格式与有效性判定

use chirpy::auth::refresh;
use chirpy::models::auth::RefreshToken;
use chrono::{Duration, Utc};
use uuid::Uuid;

#[test]
fn test_generate_is_64_lowercase_hex() {
    let token = refresh::generate().expect("Generation should succeed");

    assert_eq!(token.len(), 64);
    assert!(
        token.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')),
        "Token should be lowercase hex: {}",
        token
    );
}

#[test]
fn test_generate_never_repeats() {
    let mut seen = std::collections::HashSet::new();

    for _ in 0..100 {
        let token = refresh::generate().unwrap();
        assert!(seen.insert(token), "Generated tokens should be unique");
    }
}

fn record(expires_at: chrono::DateTime<Utc>, revoked_at: Option<chrono::DateTime<Utc>>) -> RefreshToken {
    let now = Utc::now();
    RefreshToken {
        token: refresh::generate().unwrap(),
        user_id: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
        expires_at,
        revoked_at,
    }
}

#[test]
fn test_fresh_record_is_valid() {
    let now = Utc::now();
    let token = record(now + Duration::days(60), None);

    assert!(token.is_valid(now));
}

#[test]
fn test_expired_record_is_invalid() {
    let now = Utc::now();
    let token = record(now - Duration::seconds(1), None);

    assert!(!token.is_valid(now));
}

#[test]
fn test_revocation_invalidates_unexpired_record() {
    let now = Utc::now();
    let expires_at = now + Duration::days(60);
    let mut token = record(expires_at, None);

    assert!(token.is_valid(now));

    // 撤销后立即失效，expires_at 保持不变
    token.revoked_at = Some(now);

    assert!(!token.is_valid(now));
    assert_eq!(token.expires_at, expires_at);
}

#[test]
fn test_exact_expiry_instant_is_invalid() {
    let now = Utc::now();
    let token = record(now, None);

    // now < expires_at 为严格小于
    assert!(!token.is_valid(now));
}
