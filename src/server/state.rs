//! Application State
//!
//! [`AppState`] is the central state container: the database pool, the token
//! signer, and the cover store. All three are explicit construction
//! parameters, so tests assemble the same state around an in-memory pool, a
//! fixed secret, and a temporary upload directory.
//!
//! The `FromRef` implementations let handlers extract just the part of the
//! state they need, following Axum's recommended pattern.

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::assets::CoverStore;
use crate::auth::sessions::TokenSigner;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Session token issuer/verifier
    pub signer: TokenSigner,
    /// Cover image storage
    pub covers: Arc<dyn CoverStore>,
}

impl AppState {
    pub fn new(pool: SqlitePool, signer: TokenSigner, covers: Arc<dyn CoverStore>) -> Self {
        Self {
            pool,
            signer,
            covers,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for TokenSigner {
    fn from_ref(state: &AppState) -> Self {
        state.signer.clone()
    }
}
