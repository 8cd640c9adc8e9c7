//! Profile Handler
//!
//! Implements GET /profile. The authorization guard has already verified the
//! `token` cookie; this handler just echoes the decoded identity claims.

use axum::response::Json;

use crate::auth::handlers::types::ProfileResponse;
use crate::middleware::auth::AuthUser;

/// Return the authenticated identity's claims.
pub async fn profile(AuthUser(user): AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        id: user.user_id,
        username: user.username,
    })
}
