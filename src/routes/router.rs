//! Router Assembly
//!
//! Combines the API routes, static cover file serving, CORS, and request
//! tracing into the final Axum router.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::auth::handlers::{login, logout, profile, register};
use crate::posts::handlers::{create_post, delete_post, get_post, list_posts, update_post};
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create the router with all routes configured.
///
/// Guarded handlers take the [`crate::middleware::auth::AuthUser`]
/// extractor, so `/post` can mix the public GET with guarded POST/PUT on the
/// same path without per-method middleware.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/profile", get(profile))
        .route("/post", get(list_posts).post(create_post).put(update_post))
        .route("/post/{id}", get(get_post).delete(delete_post))
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state);

    let router = if config.allowed_origins.is_empty() {
        router
    } else {
        router.layer(cors_layer(&config.allowed_origins))
    };

    router.layer(TraceLayer::new_for_http())
}

/// Cross-origin policy: only the configured browser origins may call this
/// API, with credentials allowed since the session token rides in a cookie.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring unparsable CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_skips_bad_origins() {
        // Builds without panicking even when an origin fails to parse.
        let _ = cors_layer(&["https://ok.example".to_string(), "\u{7f}bad".to_string()]);
    }
}
