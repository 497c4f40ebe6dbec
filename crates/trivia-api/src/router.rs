use axum::{
    Router,
    extract::State,
    http::StatusCode,
    middleware,
    routing::get,
};

use crate::{
    category, error::ApiError, middleware::error_envelope, question, quiz, state::ApiState,
};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(category::routes())
        .merge(question::routes())
        .merge(quiz::routes())
        .fallback(handler_404)
        .layer(middleware::map_response(error_envelope::wrap_error_response))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Ready once the database answers
async fn readiness(State(state): State<ApiState>) -> StatusCode {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn handler_404() -> ApiError {
    ApiError::NotFound("no route matches the request".to_string())
}
