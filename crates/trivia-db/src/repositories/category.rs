use sqlx::{Executor, Postgres};

use crate::models::Category;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Category>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, type
            FROM categories
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn exists<'e, E>(executor: E, category_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS(
                SELECT 1 FROM categories
                WHERE id = $1
            )
        "#,
    )
    .bind(category_id)
    .fetch_one(executor)
    .await
}
