//! Rewrites framework-generated error responses into the JSON failure envelope.
//!
//! Handler errors already go through `ApiError`. This catches what axum answers
//! on its own before a handler runs: 405 from method routing, 400 from path or
//! query parsing, 415 and friends.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::{ApiError, error_response};

/// `map_response` hook: replace non-JSON error bodies with the envelope.
pub async fn wrap_error_response(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    tracing::debug!(status = status.as_u16(), "Wrapping framework error response");

    if status == StatusCode::METHOD_NOT_ALLOWED {
        let allow = response.headers().get(header::ALLOW).cloned();
        let mut wrapped = ApiError::MethodNotAllowed.into_response();
        if let Some(allow) = allow {
            wrapped.headers_mut().insert(header::ALLOW, allow);
        }
        return wrapped;
    }

    error_response(status)
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value: &HeaderValue| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}
