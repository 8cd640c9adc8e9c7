//! Post Handlers
//!
//! HTTP handlers for the post endpoints.
//!
//! # Handlers
//!
//! - **`create_post`** - POST /post (guarded, multipart)
//! - **`update_post`** - PUT /post (guarded, multipart)
//! - **`delete_post`** - DELETE /post/{id} (guarded)
//! - **`list_posts`** - GET /post (public)
//! - **`get_post`** - GET /post/{id} (public)
//!
//! The mutating handlers take [`AuthUser`], so the authorization guard has
//! already resolved a verified identity before any of this code runs.
//! Update and delete check ownership before any change is applied,
//! including cover replacement: the uploaded file is only handed to the
//! cover store after the check passes.

use axum::{
    extract::{Multipart, Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::auth::handlers::types::MessageResponse;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::db::{self, Post, PostWithAuthor};
use crate::posts::ownership::ensure_author;
use crate::server::state::AppState;

/// Maximum number of posts returned by GET /post.
const LIST_LIMIT: i64 = 20;

/// Fields carried by the multipart post form.
#[derive(Default)]
struct PostForm {
    id: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    content: Option<String>,
    file: Option<(String, Vec<u8>)>,
}

/// Drain a multipart body into a [`PostForm`]. Unknown fields are ignored.
async fn read_post_form(mut multipart: Multipart) -> Result<PostForm, ApiError> {
    let mut form = PostForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "id" => form.id = Some(field.text().await.map_err(bad_field)?),
            "title" => form.title = Some(field.text().await.map_err(bad_field)?),
            "summary" => form.summary = Some(field.text().await.map_err(bad_field)?),
            "content" => form.content = Some(field.text().await.map_err(bad_field)?),
            "file" => {
                let original_name = field.file_name().unwrap_or("cover").to_string();
                let data = field.bytes().await.map_err(bad_field)?;
                if !data.is_empty() {
                    form.file = Some((original_name, data.to_vec()));
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

fn bad_field(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::BadRequest(err.to_string())
}

fn require(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::BadRequest(format!("missing field `{field}`")))
}

/// Create a post for the authenticated user.
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    multipart: Multipart,
) -> Result<Json<Post>, ApiError> {
    let form = read_post_form(multipart).await?;
    let title = require(form.title, "title")?;
    let summary = require(form.summary, "summary")?;
    let content = require(form.content, "content")?;

    let cover = match form.file {
        Some((original_name, data)) => Some(state.covers.store(&original_name, &data).await?),
        None => None,
    };

    let post = db::create_post(
        &state.pool,
        user.user_id,
        &title,
        &summary,
        &content,
        cover.as_deref(),
    )
    .await?;

    tracing::info!("Post {} created by {}", post.id, user.username);

    Ok(Json(post))
}

/// Update a post's fields; only the author may do this.
///
/// Title, summary, and content are always replaced. The cover is replaced
/// only when a new file was uploaded, and the previous cover asset is then
/// removed best-effort.
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    multipart: Multipart,
) -> Result<Json<Post>, ApiError> {
    let form = read_post_form(multipart).await?;
    let id = require(form.id, "id")?;
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::BadRequest("invalid post id".into()))?;
    let title = require(form.title, "title")?;
    let summary = require(form.summary, "summary")?;
    let content = require(form.content, "content")?;

    let post = db::find_post(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;
    ensure_author(&post, user.user_id)?;

    // The ownership check has passed; only now does the upload reach the
    // cover store.
    let new_cover = match form.file {
        Some((original_name, data)) => Some(state.covers.store(&original_name, &data).await?),
        None => None,
    };

    db::update_post(
        &state.pool,
        id,
        &title,
        &summary,
        &content,
        new_cover.as_deref(),
    )
    .await?;

    // A replaced cover leaves its predecessor orphaned; remove it, but the
    // row update above is the operation of record.
    if let (Some(_), Some(old_cover)) = (&new_cover, &post.cover) {
        if let Err(e) = state.covers.delete(old_cover).await {
            tracing::warn!("Failed to delete replaced cover {}: {:?}", old_cover, e);
        }
    }

    tracing::info!("Post {} updated by {}", id, user.username);

    Ok(Json(Post {
        id: post.id,
        title,
        summary,
        content,
        cover: new_cover.or(post.cover),
        author: post.author,
        created_at: post.created_at,
    }))
}

/// Delete a post and its cover asset; only the author may do this.
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let post = db::find_post(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;
    ensure_author(&post, user.user_id)?;

    // Remove the cover asset before the record. A failure here is logged
    // and the record deletion proceeds as the operation of record.
    if let Some(cover) = &post.cover {
        if let Err(e) = state.covers.delete(cover).await {
            tracing::warn!("Failed to delete cover {} for post {}: {:?}", cover, id, e);
        }
    }

    db::delete_post(&state.pool, id).await?;

    tracing::info!("Post {} deleted by {}", id, user.username);

    Ok(Json(MessageResponse::new("post deleted")))
}

/// List up to 20 posts, newest first, authors resolved to usernames.
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostWithAuthor>>, ApiError> {
    let posts = db::list_recent_posts(&state.pool, LIST_LIMIT).await?;
    Ok(Json(posts))
}

/// Get a single post by ID with its author resolved.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostWithAuthor>, ApiError> {
    let post = db::find_post_with_author(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;

    Ok(Json(post))
}
