//! Inkpost Backend
//!
//! A minimal blogging backend built on Axum. It authenticates users with
//! bcrypt-hashed credentials and cookie-carried JWT session tokens, and lets
//! authenticated users create, edit, delete, and list text posts with an
//! optional cover image.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, JWT session tokens, auth handlers
//! - **`middleware`** - Authorization guard for protected routes
//! - **`posts`** - Post repository, ownership policy, post handlers
//! - **`assets`** - Cover image storage behind a small trait
//! - **`error`** - Error taxonomy and HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs          - Module exports and documentation
//! ├── main.rs         - Server entry point
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Users, sessions, auth handlers
//! ├── middleware/     - Authorization guard
//! ├── posts/          - Repository, ownership, post handlers
//! ├── assets/         - Cover storage
//! └── error/          - Error types and conversion
//! ```
//!
//! # Request Flow
//!
//! Every mutating request passes through the authorization guard
//! ([`middleware::auth::AuthUser`]), which resolves a verified identity from
//! the `token` cookie or halts the request. Update and delete handlers then
//! consult the ownership policy ([`posts::ownership`]) before touching the
//! repository.
//!
//! # State Management
//!
//! All shared state lives in [`server::state::AppState`]: the SQLite pool,
//! the token signer, and the cover store. Everything is passed in explicitly
//! at construction, so tests run against an in-memory database, a fixed
//! secret, and a temporary upload directory.

/// Cover image storage
pub mod assets;

/// Authentication: users, sessions, handlers
pub mod auth;

/// Error types and HTTP conversion
pub mod error;

/// Authorization guard
pub mod middleware;

/// Post repository, ownership policy, and handlers
pub mod posts;

/// Route configuration
pub mod routes;

/// Server configuration, state, and initialization
pub mod server;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export commonly used types
pub use error::ApiError;
pub use server::create_app;
pub use server::state::AppState;
