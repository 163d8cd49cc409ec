//! User domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,

    // Membership state (set by the payment provider webhook)
    pub is_chirpy_red: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Credential update request (authenticated user replaces email + password)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCredentialsRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// User response (without sensitive data)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub is_chirpy_red: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
            is_chirpy_red: user.is_chirpy_red,
        }
    }
}

/// Membership upgrade webhook payload
#[derive(Debug, Deserialize)]
pub struct MembershipEvent {
    pub event: String,
    pub data: MembershipEventData,
}

#[derive(Debug, Deserialize)]
pub struct MembershipEventData {
    pub user_id: String,
}

/// The only membership event this service acts on
pub const EVENT_USER_UPGRADED: &str = "user.upgraded";
