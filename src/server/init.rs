//! Server Initialization
//!
//! Builds the Axum app from a [`ServerConfig`]: opens the database, wires up
//! the application state, and assembles the router.

use std::sync::Arc;

use axum::Router;
use chrono::Duration;

use crate::assets::FsCoverStore;
use crate::auth::sessions::TokenSigner;
use crate::routes::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;

/// Create the Axum app for the given configuration.
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated; the server cannot
/// meaningfully run without its store.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    let pool = load_database(&config.database_url).await?;
    let signer = TokenSigner::with_ttl(&config.jwt_secret, Duration::days(config.token_ttl_days));
    let covers = Arc::new(FsCoverStore::new(&config.upload_dir));

    let state = AppState::new(pool, signer, covers);

    Ok(create_router(state, config))
}
