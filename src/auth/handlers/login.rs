//! Login Handler
//!
//! Implements POST /login.
//!
//! # Authentication Process
//!
//! 1. Look up the user by username
//! 2. Verify the password against the stored bcrypt hash
//! 3. Issue a session token and set it as the `token` cookie
//!
//! # Security
//!
//! - Unknown username and wrong password return the same `400 wrong
//!   credentials` response, so nothing is revealed about which was wrong
//! - No token is issued and no cookie is set unless the password matches

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};
use bcrypt::verify;

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::sessions::session_cookie;
use crate::auth::users::find_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticate a user and install the session cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Login request for: {}", request.username);

    let user = find_user_by_username(&state.pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown user: {}", request.username);
            ApiError::WrongCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Wrong password for user: {}", request.username);
        return Err(ApiError::WrongCredentials);
    }

    let token = state.signer.issue(user.id, &user.username)?;

    tracing::info!("User logged in: {}", user.username);

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&token))]),
        Json(LoginResponse {
            id: user.id,
            username: user.username,
        }),
    ))
}
