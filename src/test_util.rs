//! Shared helpers for unit tests: an in-memory database pool with the
//! schema applied, and an [`AppState`] around it with a fixed secret.

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::assets::FsCoverStore;
use crate::auth::sessions::TokenSigner;
use crate::server::state::AppState;

/// In-memory SQLite pool with migrations applied.
///
/// Capped at one connection: each in-memory SQLite connection is its own
/// database.
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    sqlx::migrate!().run(&pool).await.expect("migrations");
    pool
}

/// App state over the given pool with a fixed test secret.
///
/// The cover store points at a path that is never written by tests going
/// through this helper; tests that exercise covers build their own store
/// over a tempdir.
pub(crate) fn test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        pool,
        TokenSigner::new("test-secret"),
        Arc::new(FsCoverStore::new(std::env::temp_dir().join("inkpost-test-covers"))),
    )
}
