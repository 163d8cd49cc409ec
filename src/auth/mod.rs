//! Authentication and authorization module

use thiserror::Error;

pub mod credentials;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod refresh;

pub use jwt::{Claims, JwtService, TOKEN_ISSUER};
pub use middleware::{jwt_auth_middleware, AuthContext};
pub use password::PasswordHasher;

/// Authentication error kinds
///
/// Header parsing, token validation and hashing all report through this
/// enum; the HTTP status mapping lives in [`crate::error::AppError`].
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header missing")]
    MissingHeader,

    #[error("malformed authorization header")]
    MalformedHeader,

    #[error("token signature invalid")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("token claims malformed")]
    MalformedClaims,

    #[error("password hashing failed: {0}")]
    HashingFailure(String),

    #[error("stored password hash invalid: {0}")]
    VerificationFailure(String),

    #[error("token signing failed: {0}")]
    SigningFailure(String),

    #[error("token generation failed: {0}")]
    TokenGeneration(String),
}
