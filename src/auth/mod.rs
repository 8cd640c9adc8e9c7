//! Authentication Module
//!
//! Handles user registration, login, logout, and session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and credential store
//! ├── sessions.rs     - JWT session tokens and the `token` cookie
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - POST /register
//!     ├── login.rs    - POST /login
//!     ├── logout.rs   - POST /logout
//!     └── profile.rs  - GET /profile
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + email + password → bcrypt hash stored →
//!    user record returned (duplicate email or username rejected)
//! 2. **Login**: username + password → hash verified → JWT issued and set
//!    as the `token` cookie
//! 3. **Profile**: `token` cookie verified by the guard → decoded claims
//!    returned
//! 4. **Logout**: `token` cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Session tokens are stateless JWTs; the server holds only the signing
//!   secret
//! - Login failures use one error for unknown user and wrong password

/// User model and credential store
pub mod users;

/// JWT session tokens
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout, profile, register};
pub use sessions::{Claims, TokenSigner};
pub use users::User;
