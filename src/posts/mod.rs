//! Posts Module
//!
//! CRUD for text posts with an optional cover image, and the ownership
//! policy that protects mutation.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Post repository
//! ├── ownership.rs - Ownership policy
//! └── handlers.rs  - HTTP handlers (create, update, delete, list, get)
//! ```
//!
//! # Invariants
//!
//! - A post's author is immutable after creation
//! - Only the post's author may update or delete it; the ownership check
//!   runs before any field is touched, so a rejected mutation leaves the
//!   post entirely unchanged
//! - Deleting a post removes its cover asset first; cover-removal failure
//!   is logged and the record deletion proceeds as the operation of record

/// Post repository
pub mod db;

/// Ownership policy
pub mod ownership;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use db::{Post, PostAuthor, PostWithAuthor};
pub use handlers::{create_post, delete_post, get_post, list_posts, update_post};
pub use ownership::{ensure_author, is_author};
