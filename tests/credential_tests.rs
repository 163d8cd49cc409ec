//! 凭证提取单元测试
//!
//! 测试 Authorization 头的严格解析

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chirpy::auth::{credentials, AuthError};

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value.parse().unwrap());
    headers
}

#[test]
fn test_bearer_token_extraction() {
    let headers = headers_with("Bearer some-token-value");
    assert_eq!(credentials::bearer_token(&headers).unwrap(), "some-token-value");
}

#[test]
fn test_bearer_missing_header() {
    let headers = HeaderMap::new();
    assert!(matches!(
        credentials::bearer_token(&headers),
        Err(AuthError::MissingHeader)
    ));
}

#[test]
fn test_bearer_empty_value() {
    let headers = headers_with("");
    assert!(matches!(
        credentials::bearer_token(&headers),
        Err(AuthError::MissingHeader)
    ));
}

#[test]
fn test_bearer_three_fields_rejected() {
    // "Bearer abc def" 共三段，必须拒绝
    let headers = headers_with("Bearer abc def");
    assert!(matches!(
        credentials::bearer_token(&headers),
        Err(AuthError::MalformedHeader)
    ));
}

#[test]
fn test_bearer_scheme_alone_rejected() {
    let headers = headers_with("Bearer");
    assert!(matches!(
        credentials::bearer_token(&headers),
        Err(AuthError::MalformedHeader)
    ));
}

#[test]
fn test_bearer_rejects_api_key_scheme() {
    // ApiKey 凭证经过 Bearer 提取器必须失败，证明 scheme 检查是严格的
    let headers = headers_with("ApiKey abc");
    assert!(matches!(
        credentials::bearer_token(&headers),
        Err(AuthError::MalformedHeader)
    ));
}

#[test]
fn test_bearer_scheme_is_case_sensitive() {
    let headers = headers_with("BEARER abc");
    assert!(matches!(
        credentials::bearer_token(&headers),
        Err(AuthError::MalformedHeader)
    ));

    let headers = headers_with("bearer abc");
    assert!(matches!(
        credentials::bearer_token(&headers),
        Err(AuthError::MalformedHeader)
    ));
}

#[test]
fn test_bearer_tolerates_extra_whitespace() {
    // 前后空白与多重分隔空白被归一化；字段数仍然必须是两个
    let headers = headers_with("   Bearer    tok-1   ");
    assert_eq!(credentials::bearer_token(&headers).unwrap(), "tok-1");
}

#[test]
fn test_api_key_extraction() {
    let headers = headers_with("ApiKey f271c81ff7084ee5b99a5091b42d486e");
    assert_eq!(
        credentials::api_key(&headers).unwrap(),
        "f271c81ff7084ee5b99a5091b42d486e"
    );
}

#[test]
fn test_api_key_missing_header() {
    let headers = HeaderMap::new();
    assert!(matches!(credentials::api_key(&headers), Err(AuthError::MissingHeader)));
}

#[test]
fn test_api_key_rejects_bearer_scheme() {
    let headers = headers_with("Bearer f271c81ff7084ee5b99a5091b42d486e");
    assert!(matches!(credentials::api_key(&headers), Err(AuthError::MalformedHeader)));
}

#[test]
fn test_api_key_three_fields_rejected() {
    let headers = headers_with("ApiKey abc def");
    assert!(matches!(credentials::api_key(&headers), Err(AuthError::MalformedHeader)));
}
