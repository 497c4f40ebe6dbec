use serde::{Deserialize, Serialize};
use trivia_db::models::Question;
use trivia_quiz::CategoryFilter;

use crate::deserializers::i64_from_number_or_string;

/// Body of `POST /quizzes`
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// The category picked in the quiz UI; id 0 means "all categories"
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "i64_from_number_or_string")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl QuizRequest {
    pub fn category_filter(&self) -> CategoryFilter {
        self.quiz_category
            .as_ref()
            .map_or(CategoryFilter::Any, |category| {
                CategoryFilter::from_id(category.id)
            })
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    /// `None` once every eligible question has been asked
    pub question: Option<Question>,
}
