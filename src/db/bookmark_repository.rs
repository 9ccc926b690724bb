use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::db::models::BookmarkRow;

/// Repository for Bookmark database operations
pub struct BookmarkRepository;

impl BookmarkRepository {
    pub async fn create(
        pool: &Pool<Postgres>,
        user_id: i32,
        job_id: i32,
    ) -> Result<BookmarkRow, sqlx::Error> {
        debug!("Creating bookmark: user_id={}, job_id={}", user_id, job_id);

        sqlx::query_as::<_, BookmarkRow>(
            r#"
            INSERT INTO bookmarks (user_id, job_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_one(pool)
        .await
    }

    /// At most one bookmark exists per (user, job) pair
    pub async fn find_by_user_and_job(
        pool: &Pool<Postgres>,
        user_id: i32,
        job_id: i32,
    ) -> Result<Option<BookmarkRow>, sqlx::Error> {
        sqlx::query_as::<_, BookmarkRow>(
            "SELECT * FROM bookmarks WHERE user_id = $1 AND job_id = $2",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_optional(pool)
        .await
    }

    /// Bookmarks of the given user, newest first
    pub async fn find_by_user(
        pool: &Pool<Postgres>,
        user_id: i32,
    ) -> Result<Vec<BookmarkRow>, sqlx::Error> {
        sqlx::query_as::<_, BookmarkRow>(
            "SELECT * FROM bookmarks WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn delete(pool: &Pool<Postgres>, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
