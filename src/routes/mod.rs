//! Route Configuration
//!
//! Assembles the HTTP surface:
//!
//! | Method & path | Auth | Handler |
//! |---|---|---|
//! | POST /register | none | [`crate::auth::register`] |
//! | POST /login | none | [`crate::auth::login`] |
//! | POST /logout | none | [`crate::auth::logout`] |
//! | GET /profile | cookie | [`crate::auth::profile`] |
//! | POST /post | cookie | [`crate::posts::create_post`] |
//! | PUT /post | cookie | [`crate::posts::update_post`] |
//! | GET /post | none | [`crate::posts::list_posts`] |
//! | GET /post/{id} | none | [`crate::posts::get_post`] |
//! | DELETE /post/{id} | cookie | [`crate::posts::delete_post`] |
//!
//! Plus static cover files under `/uploads`, CORS restricted to the
//! configured origins (with credentials, since the session token rides in a
//! cookie), and request tracing.

/// Router assembly
pub mod router;

pub use router::create_router;
