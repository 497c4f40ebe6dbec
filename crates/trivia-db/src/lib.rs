pub mod models;
pub mod repositories;

use anyhow::Context;
use sqlx::{PgPool, Postgres, migrate::MigrateDatabase, postgres::PgPoolOptions};

/// Sample trivia questions spread over the six seeded categories.
const SAMPLE_QUESTIONS_SQL: &str = include_str!("../seeds/sample_questions.sql");

/// Create a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to database")?;

    Ok(pool)
}

/// Create a pool that only connects on first use.
///
/// The URL is parsed eagerly, so a malformed URL still fails here.
pub fn create_lazy_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(database_url)
        .context("invalid database url")
}

/// Create the database named in `database_url` if it does not exist yet.
///
/// Must run before [`create_pool`], which fails on a missing database.
pub async fn ensure_database(database_url: &str) -> anyhow::Result<()> {
    let exists = Postgres::database_exists(database_url)
        .await
        .context("failed to check whether the database exists")?;

    if !exists {
        tracing::info!("Database does not exist, creating it");
        if let Err(e) = Postgres::create_database(database_url).await {
            // Another process may have created it in the meantime
            if !Postgres::database_exists(database_url).await.unwrap_or(false) {
                return Err(e).context("failed to create database");
            }
        }
    }

    Ok(())
}

/// Run the migrations in this crate's `migrations/` folder, bundled at compile time.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!()
        .run(pool)
        .await
        .context("failed to run migrations")?;

    Ok(())
}

/// Insert the bundled sample questions when the questions table is empty.
///
/// Returns the number of questions inserted, `0` when the table already had data.
pub async fn seed_sample_questions(pool: &PgPool) -> anyhow::Result<u64> {
    let mut tx = pool.begin().await?;

    let total = repositories::question::count_all(&mut *tx).await?;
    if total > 0 {
        tx.rollback().await?;
        return Ok(0);
    }

    let inserted = sqlx::raw_sql(SAMPLE_QUESTIONS_SQL)
        .execute(&mut *tx)
        .await
        .context("failed to insert sample questions")?
        .rows_affected();

    tx.commit().await?;

    Ok(inserted)
}
