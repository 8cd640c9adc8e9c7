//! Authentication Handler Types
//!
//! Request and response types shared by the authentication handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::users::User;

/// Registration request body.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    /// Chosen username (must be unique)
    pub username: String,
    /// Email address (must be unique)
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Username to log in as
    pub username: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

/// Created user record, without the password hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    /// User's unique ID
    pub id: Uuid,
    /// Username
    pub username: String,
    /// Email address
    pub email: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Login response body; the session token travels in the `token` cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Logged-in user's ID
    pub id: Uuid,
    /// Logged-in user's username
    pub username: String,
}

/// Decoded identity claims returned by GET /profile.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Authenticated user's ID
    pub id: Uuid,
    /// Authenticated user's username
    pub username: String,
}

/// Plain confirmation message.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
