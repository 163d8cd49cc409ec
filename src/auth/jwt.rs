//! JWT access token issuance and validation
//!
//! Access tokens are stateless: a token is valid exactly when its HS256
//! signature verifies and its expiry has not passed. Nothing is persisted,
//! so expiry is the only way a token stops working. The service signs and
//! accepts HS256 only; a token declaring any other algorithm fails
//! validation outright.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{auth::AuthError, config::AppConfig, error::AppError};

/// Issuer claim stamped into every access token
pub const TOKEN_ISSUER: &str = "chirpy";

/// JWT claims for access tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Subject (user ID)
    pub sub: String,

    /// Issued at
    pub iat: i64,

    /// Expiration
    pub exp: i64,
}

/// JWT service
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_exp_secs: u64,
}

impl JwtService {
    /// Create JWT service from a raw secret
    pub fn new(secret: &str, access_token_exp_secs: u64) -> Result<Self, AppError> {
        // Ensure secret is at least 32 bytes for HS256
        if secret.len() < 32 {
            return Err(AppError::Config("JWT secret too short (min 32 chars)".to_string()));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            access_token_exp_secs,
        })
    }

    /// Create JWT service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Self::new(
            config.security.jwt_secret.expose_secret(),
            config.security.access_token_exp_secs,
        )
    }

    /// Issue a signed token for the given user with an explicit lifetime
    pub fn issue(&self, user_id: &Uuid, ttl: Duration) -> Result<String, AuthError> {
        let now = Utc::now();

        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode access token: {:?}", e);
            AuthError::SigningFailure(e.to_string())
        })
    }

    /// Issue an access token with the configured lifetime
    pub fn issue_access_token(&self, user_id: &Uuid) -> Result<String, AuthError> {
        self.issue(user_id, Duration::seconds(self.access_token_exp_secs as i64))
    }

    /// Validate a token and return its subject
    ///
    /// The single validation path: signature check against the configured
    /// secret (HS256 pinned), then expiry, then subject parsing. All
    /// failures are terminal; the caller must re-authenticate.
    pub fn validate(&self, token: &str) -> Result<Uuid, AuthError> {
        let data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::Expired,
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        AuthError::InvalidSignature
                    }
                    _ => AuthError::MalformedClaims,
                }
            })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::MalformedClaims)
    }

    /// Access token lifetime in seconds, as reported to clients
    pub fn access_token_exp_secs(&self) -> u64 {
        self.access_token_exp_secs
    }
}
