use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::db::models::ApplicationRow;

/// Repository for Application database operations
pub struct ApplicationRepository;

impl ApplicationRepository {
    /// Insert a new application; status defaults to "pending"
    pub async fn create(
        pool: &Pool<Postgres>,
        job_id: i32,
        applicant_id: i32,
    ) -> Result<ApplicationRow, sqlx::Error> {
        debug!("Creating application: job_id={}, applicant_id={}", job_id, applicant_id);

        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications (job_id, applicant_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(job_id)
        .bind(applicant_id)
        .fetch_one(pool)
        .await?;

        debug!("Application created with id={}", row.id);
        Ok(row)
    }

    /// At most one application exists per (job, applicant) pair
    pub async fn find_by_job_and_applicant(
        pool: &Pool<Postgres>,
        job_id: i32,
        applicant_id: i32,
    ) -> Result<Option<ApplicationRow>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationRow>(
            "SELECT * FROM applications WHERE job_id = $1 AND applicant_id = $2",
        )
        .bind(job_id)
        .bind(applicant_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_ids(
        pool: &Pool<Postgres>,
        ids: &[i32],
    ) -> Result<Vec<ApplicationRow>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationRow>(
            "SELECT * FROM applications WHERE id = ANY($1) ORDER BY created_at DESC",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Applications filed by the given user, newest first
    pub async fn find_by_applicant(
        pool: &Pool<Postgres>,
        applicant_id: i32,
    ) -> Result<Vec<ApplicationRow>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationRow>(
            "SELECT * FROM applications WHERE applicant_id = $1 ORDER BY created_at DESC",
        )
        .bind(applicant_id)
        .fetch_all(pool)
        .await
    }

    /// Store an already-lowercased status string
    pub async fn update_status(
        pool: &Pool<Postgres>,
        id: i32,
        status: &str,
    ) -> Result<Option<ApplicationRow>, sqlx::Error> {
        debug!("Updating application id={} status={}", id, status);

        sqlx::query_as::<_, ApplicationRow>(
            "UPDATE applications SET status = $1, updated_at = now() WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
