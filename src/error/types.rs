//! Backend Error Types
//!
//! This module defines the error taxonomy used by HTTP handlers. Each
//! variant maps to one HTTP status code; the mapping lives in
//! [`ApiError::status_code`] and the response rendering in
//! `error::conversion`.
//!
//! Authentication and authorization failures short-circuit before any
//! handler logic runs; ownership failures are raised before any field of the
//! target post is touched, so a rejected update or delete leaves the post
//! unchanged.

use axum::http::StatusCode;
use thiserror::Error;

/// All errors a request handler can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No `token` cookie was presented on a protected route.
    #[error("token not provided")]
    Unauthenticated,

    /// A token was presented but failed verification: bad signature,
    /// malformed structure, or expired.
    #[error("invalid or expired token")]
    InvalidToken,

    /// Login with an unknown username or a non-matching password. One
    /// variant for both cases, so responses do not reveal which part was
    /// wrong.
    #[error("wrong credentials")]
    WrongCredentials,

    /// Registration collided with an existing user on a unique column.
    #[error("{0} is already registered")]
    DuplicateKey(&'static str),

    /// The acting identity is not the author of the targeted post.
    #[error("you are not the author of this post")]
    NotAuthor,

    /// The requested resource does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The request body was malformed or missing required fields.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Unexpected persistence failure.
    #[error("store failure")]
    Store(#[from] sqlx::Error),

    /// Password hashing or verification failed.
    #[error("password hashing failed")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token signing failed while issuing a session token.
    #[error("token signing failed")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// Cover asset storage failed.
    #[error("cover storage failure")]
    Asset(#[from] std::io::Error),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::WrongCredentials => StatusCode::BAD_REQUEST,
            Self::DuplicateKey(_) => StatusCode::BAD_REQUEST,
            Self::NotAuthor => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Hashing(_) | Self::Signing(_) | Self::Asset(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Whether a sqlx error is a uniqueness-constraint violation.
///
/// Used at registration to turn the store's constraint error into
/// [`ApiError::DuplicateKey`].
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}
