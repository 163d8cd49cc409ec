//! Credential extraction from the Authorization header
//!
//! Both user sessions (`Bearer <token>`) and service-to-service calls
//! (`ApiKey <key>`) arrive through the same header. The value must be
//! exactly two whitespace-separated fields with a case-sensitive scheme
//! literal; anything else is rejected before the credential is looked at.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::auth::AuthError;

/// Extract a bearer token (access or refresh, depending on call site)
pub fn bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    scheme_token(headers, "Bearer")
}

/// Extract a service API key
pub fn api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    scheme_token(headers, "ApiKey")
}

fn scheme_token(headers: &HeaderMap, scheme: &str) -> Result<String, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .unwrap_or("");

    if value.is_empty() {
        return Err(AuthError::MissingHeader);
    }

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(s), Some(token), None) if s == scheme => Ok(token.to_string()),
        _ => Err(AuthError::MalformedHeader),
    }
}
