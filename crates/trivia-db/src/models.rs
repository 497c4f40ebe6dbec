use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category model - groups questions by topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier
    pub id: i64,
    /// Display label (e.g. "Science")
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Question model - a trivia item with its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    /// Unique question identifier
    pub id: i64,
    /// Question text
    pub question: String,
    /// Expected answer
    pub answer: String,
    /// Category ID this question belongs to
    pub category: i64,
    /// Difficulty level (1-5)
    pub difficulty: i32,
}

/// Insert struct for Question, the id is assigned by the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_label_as_type() {
        let category = Category {
            id: 3,
            kind: "Geography".to_string(),
        };

        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "type": "Geography" }));
    }

    #[test]
    fn test_question_serialization_shape() {
        let question = Question {
            id: 13,
            question: "What is the largest lake in Africa?".to_string(),
            answer: "Lake Victoria".to_string(),
            category: 3,
            difficulty: 2,
        };

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["id"], 13);
        assert_eq!(json["question"], "What is the largest lake in Africa?");
        assert_eq!(json["answer"], "Lake Victoria");
        assert_eq!(json["category"], 3);
        assert_eq!(json["difficulty"], 2);
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
