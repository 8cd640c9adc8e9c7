//! Server Configuration
//!
//! Loads configuration from environment variables and opens the database.
//!
//! # Configuration Sources
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `DATABASE_URL` | `sqlite://inkpost.db?mode=rwc` | SQLite database |
//! | `JWT_SECRET` | dev fallback (warned) | Token signing secret |
//! | `TOKEN_TTL_DAYS` | `30` | Session token lifetime |
//! | `UPLOAD_DIR` | `uploads` | Cover image directory |
//! | `ALLOWED_ORIGINS` | empty | Comma-separated CORS origins |
//! | `SERVER_PORT` | `8000` | Listen port |

use std::path::PathBuf;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Server configuration, read once at startup and passed into construction.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite connection string
    pub database_url: String,
    /// Session token signing secret
    pub jwt_secret: String,
    /// Session token lifetime in days
    pub token_ttl_days: i64,
    /// Directory for stored cover images
    pub upload_dir: PathBuf,
    /// Browser origins allowed to call this API with credentials
    pub allowed_origins: Vec<String>,
    /// Listen port
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment, with development defaults.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using an insecure development secret");
            "insecure-dev-secret".to_string()
        });

        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://inkpost.db?mode=rwc".to_string()),
            jwt_secret,
            token_ttl_days: std::env::var("TOKEN_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}

/// Split a comma-separated origin list, dropping empty entries.
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Open the database pool and run migrations.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database");

    // An in-memory SQLite database exists per connection, so the pool must
    // not hand out more than one.
    let mut options = SqlitePoolOptions::new();
    if database_url.contains(":memory:") {
        options = options.max_connections(1);
    }
    let pool = options.connect(database_url).await?;

    tracing::info!("Running database migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:3000, https://example.com"),
            vec!["http://localhost:3000", "https://example.com"]
        );
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ").is_empty());
    }

    #[tokio::test]
    async fn test_load_database_runs_migrations() {
        let pool = load_database("sqlite::memory:").await.unwrap();

        // Migrated schema accepts a user row.
        sqlx::query("INSERT INTO users (id, username, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?)")
            .bind(uuid::Uuid::new_v4())
            .bind("alice")
            .bind("a@x.com")
            .bind("hash")
            .bind(chrono::Utc::now())
            .execute(&pool)
            .await
            .unwrap();
    }
}
