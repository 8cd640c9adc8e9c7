//! Post Repository
//!
//! Persistence for posts. Single-row writes rely on the store's own
//! atomicity; there is no optimistic concurrency control, so racing updates
//! to the same post are last-write-wins.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// A stored post.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID
    pub id: Uuid,
    /// Title
    pub title: String,
    /// Summary
    pub summary: String,
    /// Body text
    pub content: String,
    /// Reference into the cover store, if the post has a cover
    pub cover: Option<String>,
    /// Authoring user's ID (immutable after creation)
    pub author: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Author reference resolved for display.
#[derive(Debug, Clone, Serialize)]
pub struct PostAuthor {
    pub id: Uuid,
    pub username: String,
}

/// A post with its author reference resolved to the author's username.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover: Option<String>,
    pub author: PostAuthor,
    pub created_at: DateTime<Utc>,
}

/// Create a new post.
pub async fn create_post(
    pool: &SqlitePool,
    author: Uuid,
    title: &str,
    summary: &str,
    content: &str,
    cover: Option<&str>,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, summary, content, cover, author, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, title, summary, content, cover, author, created_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(summary)
    .bind(content)
    .bind(cover)
    .bind(author)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Get a post by ID, or `None` if no such post exists.
pub async fn find_post(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, summary, content, cover, author, created_at
        FROM posts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Update a post's fields in place.
///
/// Title, summary, and content are always replaced. The cover is replaced
/// only when a new reference is supplied; `None` retains the existing cover
/// (partial-field policy, not a full overwrite).
pub async fn update_post(
    pool: &SqlitePool,
    id: Uuid,
    title: &str,
    summary: &str,
    content: &str,
    new_cover: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET title = ?, summary = ?, content = ?, cover = COALESCE(?, cover)
        WHERE id = ?
        "#,
    )
    .bind(title)
    .bind(summary)
    .bind(content)
    .bind(new_cover)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a post record.
pub async fn delete_post(pool: &SqlitePool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

fn row_to_post_with_author(row: &sqlx::sqlite::SqliteRow) -> PostWithAuthor {
    PostWithAuthor {
        id: row.get("id"),
        title: row.get("title"),
        summary: row.get("summary"),
        content: row.get("content"),
        cover: row.get("cover"),
        author: PostAuthor {
            id: row.get("author_id"),
            username: row.get("author_username"),
        },
        created_at: row.get("created_at"),
    }
}

/// Get a post by ID with its author's username resolved.
pub async fn find_post_with_author(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<PostWithAuthor>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT p.id, p.title, p.summary, p.content, p.cover, p.created_at,
               u.id AS author_id, u.username AS author_username
        FROM posts p
        JOIN users u ON u.id = p.author
        WHERE p.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_post_with_author))
}

/// List the most recent posts, newest first, truncated to `limit`.
///
/// Produces a finite snapshot; there is no pagination cursor.
pub async fn list_recent_posts(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    // rowid breaks ties between posts created in the same instant.
    let rows = sqlx::query(
        r#"
        SELECT p.id, p.title, p.summary, p.content, p.cover, p.created_at,
               u.id AS author_id, u.username AS author_username
        FROM posts p
        JOIN users u ON u.id = p.author
        ORDER BY p.created_at DESC, p.rowid DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_post_with_author).collect())
}
