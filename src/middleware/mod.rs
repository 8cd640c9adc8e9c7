//! Middleware Module
//!
//! Request-processing gates that run before handler logic. Currently holds
//! the authorization guard, which turns the `token` cookie into a verified
//! identity or a terminal rejection.

pub mod auth;

pub use auth::{AuthUser, AuthenticatedUser};
