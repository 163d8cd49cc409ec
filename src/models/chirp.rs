//! Chirp domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A posted chirp
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub body: String,
}

/// Create chirp request
#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

/// Query parameters for listing chirps
#[derive(Debug, Default, Deserialize)]
pub struct ListChirpsQuery {
    /// Filter by author (UUID string; invalid values are a client error)
    pub author_id: Option<String>,
    /// "asc" (default) or "desc" by creation time
    pub sort: Option<String>,
}
