//! Authorization Guard
//!
//! Protects routes that require authentication. The guard extracts the
//! session token from the `token` cookie, verifies it, and hands the decoded
//! claims to the handler:
//!
//! - No cookie present → `401 Unauthenticated`
//! - Cookie present but verification fails (bad signature, malformed,
//!   expired) → `403 InvalidToken`
//! - Valid → [`AuthenticatedUser`] available to the handler
//!
//! The guard is a pure function from token to identity; it performs no I/O
//! beyond signature verification. Handlers on protected routes take
//! [`AuthUser`] as a parameter, so rejection happens before any handler
//! logic runs and before any resource is read or written.

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::auth::sessions::TOKEN_COOKIE;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Verified identity extracted from the session token.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Axum extractor for the authenticated user.
///
/// Use as a handler parameter on protected routes:
///
/// ```rust,ignore
/// async fn handler(AuthUser(user): AuthUser) { /* user.user_id, user.username */ }
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_cookies(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing token cookie");
            ApiError::Unauthenticated
        })?;

        let claims = state.signer.verify(&token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            ApiError::InvalidToken
        })?;

        // The subject must be a canonical user ID. A token with anything
        // else in it was not minted by this issuer.
        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
            tracing::warn!("Invalid user ID in token: {:?}", e);
            ApiError::InvalidToken
        })?;

        Ok(AuthUser(AuthenticatedUser {
            user_id,
            username: claims.username,
        }))
    }
}

/// Extract the session token from the request's `Cookie` headers.
fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == TOKEN_COOKIE).then(|| value.to_string())
        })
        .next()
}
