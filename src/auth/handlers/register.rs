//! Registration Handler
//!
//! Implements POST /register.
//!
//! # Registration Process
//!
//! 1. Reject empty username, email, or password
//! 2. Reject an email that is already registered
//! 3. Hash the password with bcrypt
//! 4. Create the user; a username collision at the store also surfaces as
//!    `DuplicateKey`
//! 5. Return the created record without the hash
//!
//! # Errors
//!
//! * `400 DuplicateKey` - email or username already registered
//! * `400 BadRequest` - empty field
//! * `500` - hashing or store failure

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::users::{create_user, find_user_by_email};
use crate::error::{is_unique_violation, ApiError};

/// Register a new user.
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    tracing::info!(
        "Registration request for username: {}, email: {}",
        request.username,
        request.email
    );

    if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::BadRequest(
            "username, email, and password must not be empty".to_string(),
        ));
    }

    if find_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::DuplicateKey("email"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(&pool, &request.username, &request.email, &password_hash)
        .await
        .map_err(|e| {
            // The email check above races with concurrent registration; the
            // schema constraint is the source of truth for both columns.
            if is_unique_violation(&e) {
                tracing::warn!("Username already registered: {}", request.username);
                ApiError::DuplicateKey("username")
            } else {
                ApiError::Store(e)
            }
        })?;

    tracing::info!("User created: {} ({})", user.username, user.email);

    Ok(Json(user.into()))
}
