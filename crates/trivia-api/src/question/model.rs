use serde::{Deserialize, Serialize};
use trivia_db::models::{NewQuestion, Question};
use validator::Validate;

use crate::{
    category::model::CategoryMap,
    deserializers::{i32_from_number_or_string, i64_from_number_or_string},
};

/// Body of `POST /questions`. A `searchTerm` key selects search, anything else must be a new question.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionsPayload {
    Search(SearchRequest),
    Create(CreateQuestionRequest),
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: String,
    #[serde(deserialize_with = "i64_from_number_or_string")]
    pub category: i64,
    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    #[serde(deserialize_with = "i32_from_number_or_string")]
    pub difficulty: i32,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(request: CreateQuestionRequest) -> Self {
        Self {
            question: request.question,
            answer: request.answer,
            category: request.category,
            difficulty: request.difficulty,
        }
    }
}

/// `GET /questions`
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
    pub current_category: Option<i64>,
}

/// Search results
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}
