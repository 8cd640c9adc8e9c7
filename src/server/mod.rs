//! Server Module
//!
//! Configuration, application state, and app creation.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - Environment configuration and database setup
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. [`config::ServerConfig::from_env`] reads configuration
//! 2. [`config::load_database`] opens the pool and runs migrations
//! 3. [`state::AppState`] bundles the pool, token signer, and cover store
//! 4. [`init::create_app`] assembles the router around that state
//!
//! Everything is passed in explicitly at construction; there are no ambient
//! globals, so tests build the same router around an in-memory database.

/// Environment configuration and database setup
pub mod config;

/// Application state
pub mod state;

/// App creation
pub mod init;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
