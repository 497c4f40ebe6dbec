use std::collections::HashSet;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use trivia_db::repositories::{category, question};

use crate::{
    ApiState,
    error::ApiError,
    metrics::record_quiz_round,
    response::{Success, success},
};

use super::model::{QuizRequest, QuizResponse};

/// Create the quiz routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/quizzes", post(next_quiz_question))
}

async fn next_quiz_question(
    State(state): State<ApiState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<Success<QuizResponse>>, ApiError> {
    let Json(request) = payload?;
    let filter = request.category_filter();

    if let Some(category_id) = filter.category_id()
        && !category::exists(&state.pool, category_id).await?
    {
        return Err(ApiError::NotFound(format!(
            "category {category_id} does not exist"
        )));
    }

    let candidates = question::list_quiz_candidates(&state.pool, filter.category_id()).await?;
    let previous: HashSet<i64> = request.previous_questions.into_iter().collect();
    let remaining = trivia_quiz::remaining(&candidates, &previous, |q| q.id);

    let question = trivia_quiz::select_next(
        candidates,
        &previous,
        |q| q.id,
        &mut rand::thread_rng(),
    );

    let label = filter.label();
    record_quiz_round(&label, question.is_none());
    tracing::debug!(
        category = %label,
        remaining,
        question_id = question.as_ref().map(|q| q.id),
        "Quiz round"
    );

    Ok(success(QuizResponse { question }))
}
