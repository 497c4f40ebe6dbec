use sqlx::{Executor, Postgres};

use crate::models::{NewQuestion, Question};

pub async fn count_all<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*)
            FROM questions
        "#,
    )
    .fetch_one(executor)
    .await
}

/// One window of questions ordered by id.
pub async fn list_page<'e, E>(
    executor: E,
    limit: i64,
    offset: i64,
) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, question_id: i64) -> Result<Option<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
        "#,
    )
    .bind(question_id)
    .fetch_optional(executor)
    .await
}

/// Insert a question and return its id.
pub async fn insert<'e, E>(executor: E, new_question: &NewQuestion) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
        "#,
    )
    .bind(&new_question.question)
    .bind(&new_question.answer)
    .bind(new_question.category)
    .bind(new_question.difficulty)
    .fetch_one(executor)
    .await
}

/// Delete a question, returning whether a row was removed.
pub async fn delete_by_id<'e, E>(executor: E, question_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM questions
            WHERE id = $1
        "#,
    )
    .bind(question_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Case-insensitive substring search on the question text.
///
/// `strpos` keeps `%` and `_` in the term literal, unlike `ILIKE`.
pub async fn search<'e, E>(executor: E, term: &str) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE strpos(lower(question), lower($1)) > 0
            ORDER BY id
        "#,
    )
    .bind(term)
    .fetch_all(executor)
    .await
}

pub async fn list_by_category<'e, E>(executor: E, category_id: i64) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(executor)
    .await
}

/// Quiz candidates: every question when `category_id` is `None`, else that category's.
pub async fn list_quiz_candidates<'e, E>(
    executor: E,
    category_id: Option<i64>,
) -> Result<Vec<Question>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE $1::BIGINT IS NULL OR category = $1
            ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(executor)
    .await
}
