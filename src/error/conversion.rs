//! Error Conversion
//!
//! Converts [`ApiError`] values into HTTP responses so handlers can return
//! them directly.
//!
//! # Response Format
//!
//! Errors are rendered as JSON:
//!
//! ```json
//! {
//!   "error": "you are not the author of this post",
//!   "status": 403
//! }
//! ```
//!
//! Server-side failures (500) log their detail here and present only a
//! generic message to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {:?}", self);
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_error_response_body() {
        let response = ApiError::NotAuthor.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 403);
        assert_eq!(body["error"], "you are not the author of this post");
    }

    #[tokio::test]
    async fn test_store_error_detail_not_leaked() {
        let response = ApiError::Store(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "store failure");
    }
}
