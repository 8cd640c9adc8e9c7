//! Logout Handler
//!
//! Implements POST /logout. Stateless sessions cannot be revoked
//! server-side, so logout simply clears the `token` cookie on the client.

use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::auth::handlers::types::MessageResponse;
use crate::auth::sessions::clear_session_cookie;

/// Clear the session cookie.
pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(MessageResponse::new("logged out")),
    )
}
