//! Shared integration-test harness: the real router over an in-memory
//! database, a fixed signing secret, and a temporary upload directory.

use std::sync::Arc;

use axum_test::{TestServer, TestServerConfig};
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;

use inkpost::assets::FsCoverStore;
use inkpost::auth::sessions::TokenSigner;
use inkpost::routes::create_router;
use inkpost::server::config::ServerConfig;
use inkpost::server::state::AppState;

pub struct TestApp {
    pub server: TestServer,
    /// Upload directory; dropped (and deleted) with the app.
    pub uploads: TempDir,
}

/// Build the app the way `create_app` does, but on test collaborators.
///
/// The server saves cookies between requests, so a login call authenticates
/// the requests that follow it; use [`TestApp::clear_session`] to switch
/// identities.
pub async fn spawn_app() -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    sqlx::migrate!().run(&pool).await.expect("migrations");

    let uploads = tempfile::tempdir().expect("upload dir");
    let state = AppState::new(
        pool,
        TokenSigner::new("integration-test-secret"),
        Arc::new(FsCoverStore::new(uploads.path())),
    );

    let config = ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "integration-test-secret".to_string(),
        token_ttl_days: 30,
        upload_dir: uploads.path().to_path_buf(),
        allowed_origins: vec![],
        port: 0,
    };

    let server = TestServer::new_with_config(
        create_router(state, &config),
        TestServerConfig {
            save_cookies: true,
            ..TestServerConfig::default()
        },
    )
    .expect("test server");

    TestApp { server, uploads }
}

impl TestApp {
    /// Register a user; panics on failure.
    pub async fn register(&self, username: &str, email: &str, password: &str) {
        let response = self
            .server
            .post("/register")
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .await;
        response.assert_status_ok();
    }

    /// Log in; the session cookie is saved on the server for later requests.
    pub async fn login(&self, username: &str, password: &str) {
        let response = self
            .server
            .post("/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .await;
        response.assert_status_ok();
    }

    /// Drop the saved session cookie, switching back to anonymous.
    pub fn clear_session(&mut self) {
        self.server.clear_cookies();
    }
}
