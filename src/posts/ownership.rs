//! Post Ownership Policy
//!
//! Determines whether the acting identity may mutate or delete a given post.
//! Author and actor are compared as canonical [`Uuid`] values, so equality
//! is value equality regardless of how either identifier arrived.
//!
//! Every update and delete consults this policy before touching the post.

use uuid::Uuid;

use crate::error::ApiError;
use crate::posts::db::Post;

/// Whether `acting_user` is the author of `post`.
pub fn is_author(post: &Post, acting_user: Uuid) -> bool {
    post.author == acting_user
}

/// Reject with [`ApiError::NotAuthor`] unless `acting_user` authored `post`.
pub fn ensure_author(post: &Post, acting_user: Uuid) -> Result<(), ApiError> {
    if is_author(post, acting_user) {
        Ok(())
    } else {
        tracing::warn!(
            "User {} attempted to mutate post {} owned by {}",
            acting_user,
            post.id,
            post.author
        );
        Err(ApiError::NotAuthor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post_by(author: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            summary: "s".to_string(),
            content: "c".to_string(),
            cover: None,
            author,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_author_matches() {
        let author = Uuid::new_v4();
        let post = post_by(author);

        assert!(is_author(&post, author));
        assert!(ensure_author(&post, author).is_ok());
    }

    #[test]
    fn test_other_user_rejected() {
        let post = post_by(Uuid::new_v4());
        let other = Uuid::new_v4();

        assert!(!is_author(&post, other));
        assert!(matches!(
            ensure_author(&post, other),
            Err(ApiError::NotAuthor)
        ));
    }

    #[test]
    fn test_equality_is_by_value() {
        let author = Uuid::new_v4();
        let post = post_by(author);

        // Same logical identifier arriving via a different representation.
        let reparsed = Uuid::parse_str(&author.to_string()).unwrap();
        assert!(is_author(&post, reparsed));
    }
}
