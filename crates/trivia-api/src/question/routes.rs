use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use sqlx::PgPool;
use trivia_db::{
    models::{NewQuestion, Question},
    repositories::{category, question},
};
use validator::Validate;

use crate::{
    ApiState,
    category::model::into_category_map,
    error::ApiError,
    pagination::{PageQuery, QUESTIONS_PER_PAGE},
    response::{Success, success},
};

use super::model::{
    CreateQuestionRequest, CreatedResponse, DeletedResponse, QuestionPage, QuestionsPayload,
    SearchRequest, SearchResponse,
};

/// Create the question routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{question_id}", delete(delete_question))
}

async fn list_questions(
    State(state): State<ApiState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Success<QuestionPage>>, ApiError> {
    let offset = query.offset()?;

    let questions = question::list_page(&state.pool, QUESTIONS_PER_PAGE, offset).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound(format!(
            "page {} has no questions",
            query.page
        )));
    }

    let (total_questions, categories) = tokio::try_join!(
        question::count_all(&state.pool),
        category::list_all(&state.pool)
    )?;

    Ok(success(QuestionPage {
        questions,
        total_questions,
        categories: into_category_map(categories),
        current_category: None,
    }))
}

async fn create_or_search(
    State(state): State<ApiState>,
    payload: Result<Json<QuestionsPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;

    match payload {
        QuestionsPayload::Search(request) => Ok(search_questions(&state.pool, request)
            .await?
            .into_response()),
        QuestionsPayload::Create(request) => Ok(create_question(&state.pool, request)
            .await?
            .into_response()),
    }
}

async fn search_questions(
    pool: &PgPool,
    request: SearchRequest,
) -> Result<Json<Success<SearchResponse>>, ApiError> {
    let questions = question::search(pool, &request.search_term).await?;

    tracing::debug!(
        search_term = %request.search_term,
        matches = questions.len(),
        "Question search"
    );

    Ok(success(SearchResponse {
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

async fn create_question(
    pool: &PgPool,
    request: CreateQuestionRequest,
) -> Result<Json<Success<CreatedResponse>>, ApiError> {
    request.validate()?;
    let new_question = NewQuestion::from(request);

    let mut tx = pool.begin().await?;

    if !category::exists(&mut *tx, new_question.category).await? {
        return Err(ApiError::Unprocessable(format!(
            "category {} does not exist",
            new_question.category
        )));
    }

    let created = question::insert(&mut *tx, &new_question)
        .await
        .map_err(|e| match e {
            // Category removed between the check and the insert
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => ApiError::Unprocessable(
                format!("category {} does not exist", new_question.category),
            ),
            other => ApiError::Database(other),
        })?;

    tx.commit().await?;

    tracing::info!(
        question_id = created,
        category = new_question.category,
        difficulty = new_question.difficulty,
        "Question created"
    );

    let (questions, total_questions) = first_page(pool).await?;

    Ok(success(CreatedResponse {
        created,
        questions,
        total_questions,
    }))
}

async fn delete_question(
    State(state): State<ApiState>,
    Path(question_id): Path<i64>,
) -> Result<Json<Success<DeletedResponse>>, ApiError> {
    if !question::delete_by_id(&state.pool, question_id).await? {
        return Err(ApiError::Unprocessable(format!(
            "question {question_id} does not exist"
        )));
    }

    tracing::info!(question_id, "Question deleted");

    let (questions, total_questions) = first_page(&state.pool).await?;

    Ok(success(DeletedResponse {
        deleted: question_id,
        questions,
        total_questions,
    }))
}

/// First page of the collection plus the overall count, returned after every mutation
async fn first_page(pool: &PgPool) -> Result<(Vec<Question>, i64), sqlx::Error> {
    tokio::try_join!(
        question::list_page(pool, QUESTIONS_PER_PAGE, 0),
        question::count_all(pool)
    )
}
