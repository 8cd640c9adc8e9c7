//! Post API integration tests
//!
//! Exercises post CRUD, the authorization guard, the ownership policy, and
//! the cover asset lifecycle through the real router.

mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use common::{spawn_app, TestApp};
use pretty_assertions::assert_eq;

fn post_form(title: &str, summary: &str, content: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("title", title.to_string())
        .add_text("summary", summary.to_string())
        .add_text("content", content.to_string())
}

fn with_cover(form: MultipartForm, file_name: &str, bytes: &[u8]) -> MultipartForm {
    form.add_part(
        "file",
        Part::bytes(bytes.to_vec())
            .file_name(file_name.to_string())
            .mime_type("image/png"),
    )
}

/// Create a post as the currently logged-in user and return its JSON body.
async fn create_post(app: &TestApp, form: MultipartForm) -> serde_json::Value {
    let response = app.server.post("/post").multipart(form).await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn mutating_endpoints_require_a_token() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/post")
        .multipart(post_form("t", "s", "c"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .put("/post")
        .multipart(post_form("t", "s", "c"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .delete("/post/00000000-0000-0000-0000-000000000000")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_then_fetch_roundtrip() {
    let mut app = spawn_app().await;
    app.register("alice", "a@x.com", "p1").await;
    app.login("alice", "p1").await;

    let created = create_post(&app, post_form("Hello", "greeting", "First post body")).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["title"], "Hello");
    assert!(created["cover"].is_null());

    app.clear_session();
    let response = app.server.get(&format!("/post/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let fetched: serde_json::Value = response.json();
    assert_eq!(fetched["title"], "Hello");
    assert_eq!(fetched["summary"], "greeting");
    assert_eq!(fetched["content"], "First post body");
    assert_eq!(fetched["author"]["username"], "alice");
    assert!(fetched.get("created_at").is_some());

    // Idempotent read: fetching again returns the same content.
    let again: serde_json::Value = app.server.get(&format!("/post/{id}")).await.json();
    assert_eq!(again, fetched);
}

#[tokio::test]
async fn create_with_cover_serves_the_asset() {
    let mut app = spawn_app().await;
    app.register("alice", "a@x.com", "p1").await;
    app.login("alice", "p1").await;

    let form = with_cover(post_form("t", "s", "c"), "cover.png", b"png-bytes");
    let created = create_post(&app, form).await;

    let cover = created["cover"].as_str().unwrap().to_string();
    assert!(cover.ends_with(".png"));

    app.clear_session();
    let response = app.server.get(&format!("/uploads/{cover}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.as_bytes().as_ref(), b"png-bytes");
}

#[tokio::test]
async fn list_returns_newest_first() {
    let app = spawn_app().await;
    app.register("alice", "a@x.com", "p1").await;
    app.login("alice", "p1").await;

    for title in ["first", "second", "third"] {
        create_post(&app, post_form(title, "s", "c")).await;
    }

    let response = app.server.get("/post").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let posts: serde_json::Value = response.json();
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["title"], "third");
    assert_eq!(posts[2]["title"], "first");
    assert_eq!(posts[0]["author"]["username"], "alice");
}

#[tokio::test]
async fn author_can_update_and_cover_is_retained() {
    let app = spawn_app().await;
    app.register("alice", "a@x.com", "p1").await;
    app.login("alice", "p1").await;

    let form = with_cover(post_form("Old", "old", "old"), "cover.png", b"bytes");
    let created = create_post(&app, form).await;
    let id = created["id"].as_str().unwrap().to_string();
    let cover = created["cover"].as_str().unwrap().to_string();

    let response = app
        .server
        .put("/post")
        .multipart(post_form("New", "new", "new").add_text("id", id.clone()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let fetched: serde_json::Value = app.server.get(&format!("/post/{id}")).await.json();
    assert_eq!(fetched["title"], "New");
    assert_eq!(fetched["summary"], "new");
    assert_eq!(fetched["content"], "new");
    // No new file was uploaded, so the existing cover is retained.
    assert_eq!(fetched["cover"], cover.as_str());
}

#[tokio::test]
async fn update_replaces_cover_when_new_file_uploaded() {
    let app = spawn_app().await;
    app.register("alice", "a@x.com", "p1").await;
    app.login("alice", "p1").await;

    let created = create_post(
        &app,
        with_cover(post_form("t", "s", "c"), "old.png", b"old-bytes"),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    let old_cover = created["cover"].as_str().unwrap().to_string();

    let form = with_cover(
        post_form("t", "s", "c").add_text("id", id.clone()),
        "new.jpg",
        b"new-bytes",
    );
    let response = app.server.put("/post").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let fetched: serde_json::Value = app.server.get(&format!("/post/{id}")).await.json();
    let new_cover = fetched["cover"].as_str().unwrap();
    assert!(new_cover.ends_with(".jpg"));
    assert_ne!(new_cover, old_cover);

    // The replaced asset is gone from the store.
    assert!(!app.uploads.path().join(&old_cover).exists());
}

#[tokio::test]
async fn non_author_update_is_rejected_and_post_unchanged() {
    let mut app = spawn_app().await;
    app.register("alice", "a@x.com", "p1").await;
    app.register("bob", "b@x.com", "p2").await;

    app.login("alice", "p1").await;
    let created = create_post(&app, post_form("Hello", "greeting", "body")).await;
    let id = created["id"].as_str().unwrap().to_string();

    let before: serde_json::Value = app.server.get(&format!("/post/{id}")).await.json();

    app.clear_session();
    app.login("bob", "p2").await;
    let response = app
        .server
        .put("/post")
        .multipart(post_form("Hijacked", "x", "x").add_text("id", id.clone()))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let after: serde_json::Value = app.server.get(&format!("/post/{id}")).await.json();
    assert_eq!(before, after);
}

#[tokio::test]
async fn update_missing_post_is_not_found() {
    let app = spawn_app().await;
    app.register("alice", "a@x.com", "p1").await;
    app.login("alice", "p1").await;

    let response = app
        .server
        .put("/post")
        .multipart(
            post_form("t", "s", "c")
                .add_text("id", "00000000-0000-0000-0000-000000000000".to_string()),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_flow_checks_ownership_then_removes_cover_and_record() {
    let mut app = spawn_app().await;
    app.register("alice", "a@x.com", "p1").await;
    app.register("bob", "b@x.com", "p2").await;

    app.login("alice", "p1").await;
    let created = create_post(
        &app,
        with_cover(post_form("t", "s", "c"), "cover.png", b"bytes"),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    let cover = created["cover"].as_str().unwrap().to_string();

    // Not the author: rejected, post intact.
    app.clear_session();
    app.login("bob", "p2").await;
    let response = app.server.delete(&format!("/post/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    // The author: deletion removes the cover asset and the record.
    app.clear_session();
    app.login("alice", "p1").await;
    let response = app.server.delete(&format!("/post/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(!app.uploads.path().join(&cover).exists());

    let response = app.server.get(&format!("/post/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    // Repeating the delete after success is NotFound.
    let response = app.server.delete(&format!("/post/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_post_is_not_found() {
    let app = spawn_app().await;
    app.register("alice", "a@x.com", "p1").await;
    app.login("alice", "p1").await;

    let response = app
        .server
        .delete("/post/00000000-0000-0000-0000-000000000000")
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

/// The end-to-end scenario: register, login, create, list, a forbidden
/// cross-user update, then delete and confirm the post is gone.
#[tokio::test]
async fn full_blogging_scenario() {
    let mut app = spawn_app().await;

    app.register("alice", "a@x.com", "p1").await;
    app.login("alice", "p1").await;

    let created = create_post(&app, post_form("Hello", "a greeting", "Hello, world")).await;
    let id = created["id"].as_str().unwrap().to_string();

    let posts: serde_json::Value = app.server.get("/post").await.json();
    let posts = posts.as_array().unwrap();
    assert_eq!(posts[0]["id"].as_str().unwrap(), id);
    assert_eq!(posts[0]["author"]["username"], "alice");

    // Another user cannot edit Alice's post.
    app.clear_session();
    app.register("bob", "b@x.com", "p2").await;
    app.login("bob", "p2").await;
    let response = app
        .server
        .put("/post")
        .multipart(post_form("Taken over", "x", "x").add_text("id", id.clone()))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let unchanged: serde_json::Value = app.server.get(&format!("/post/{id}")).await.json();
    assert_eq!(unchanged["title"], "Hello");

    // Alice deletes her post; it is gone afterwards.
    app.clear_session();
    app.login("alice", "p1").await;
    let response = app.server.delete(&format!("/post/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get(&format!("/post/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
