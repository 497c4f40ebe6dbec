//! Success envelope shared by every endpoint.

use axum::Json;
use serde::Serialize;

/// Wraps an operation-specific body as `{"success": true, ...body}`.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

impl<T: Serialize> Success<T> {
    pub const fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

/// Shorthand for handlers: `Ok(success(body))`.
pub const fn success<T: Serialize>(body: T) -> Json<Success<T>> {
    Json(Success::new(body))
}
