use std::collections::BTreeMap;

use serde::Serialize;
use trivia_db::models::{Category, Question};

/// Category id -> label, serialized as a JSON object keyed by id
pub type CategoryMap = BTreeMap<i64, String>;

pub fn into_category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id, category.kind))
        .collect()
}

/// `GET /categories`
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

/// `GET /categories/{id}/questions`
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i64,
}
