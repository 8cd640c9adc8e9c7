//! Authentication Handlers
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /login - Credential check, sets the `token` cookie
//! - **`logout`** - POST /logout - Clears the `token` cookie
//! - **`profile`** - GET /profile - Decoded identity claims (guarded)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Profile handler
pub mod profile;

pub use login::login;
pub use logout::logout;
pub use profile::profile;
pub use register::register;
pub use types::{LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, UserResponse};
