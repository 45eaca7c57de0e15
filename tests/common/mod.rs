#![allow(dead_code)]

use sqlx::SqlitePool;
use tempfile::TempDir;
use trivia_api::db;

/// A migrated, seeded database living in its own temp directory.
pub struct TestDb {
    pub pool: SqlitePool,
    pub dir: TempDir,
}

pub async fn create_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!("sqlite:{}", dir.path().join("trivia.db").display());
    let pool = db::establish_connection(&url, 2)
        .await
        .expect("failed to create test database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    TestDb { pool, dir }
}

/// Number of questions in the seed migration.
pub const SEEDED_QUESTIONS: i64 = 19;
