//! Error Module
//!
//! Defines the error taxonomy used throughout the backend and its conversion
//! into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Taxonomy
//!
//! - `Unauthenticated` - no credential presented (401)
//! - `InvalidToken` - bad, malformed, or expired credential (403)
//! - `WrongCredentials` - login with unknown user or wrong password (400)
//! - `DuplicateKey` - uniqueness violation at registration (400)
//! - `NotAuthor` - valid credential, wrong owner (403)
//! - `NotFound` - missing resource (404)
//! - `BadRequest` - malformed request body (400)
//! - `Store` / `Signing` / `Asset` - unexpected server-side failures (500)
//!
//! All errors implement `IntoResponse`, so handlers return
//! `Result<Json<T>, ApiError>` and propagate with `?`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{is_unique_violation, ApiError};
