use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use trivia_db::repositories::{category, question};

use crate::{
    ApiState,
    error::ApiError,
    response::{Success, success},
};

use super::model::{CategoriesResponse, CategoryQuestionsResponse, into_category_map};

/// Create the category routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(list_category_questions),
        )
}

async fn list_categories(
    State(state): State<ApiState>,
) -> Result<Json<Success<CategoriesResponse>>, ApiError> {
    let categories = category::list_all(&state.pool).await?;

    Ok(success(CategoriesResponse {
        categories: into_category_map(categories),
    }))
}

async fn list_category_questions(
    State(state): State<ApiState>,
    Path(category_id): Path<i64>,
) -> Result<Json<Success<CategoryQuestionsResponse>>, ApiError> {
    if !category::exists(&state.pool, category_id).await? {
        return Err(ApiError::NotFound(format!(
            "category {category_id} does not exist"
        )));
    }

    let questions = question::list_by_category(&state.pool, category_id).await?;

    Ok(success(CategoryQuestionsResponse {
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}
