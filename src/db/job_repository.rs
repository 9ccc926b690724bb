use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::api::job::models::{JobFields, NewJob};
use crate::db::models::JobRow;

/// Repository for Job database operations
pub struct JobRepository;

impl JobRepository {
    /// Insert a new job in the database and return the full record
    pub async fn create(pool: &Pool<Postgres>, job: &NewJob) -> Result<JobRow, sqlx::Error> {
        debug!(
            "Creating job: title={}, company_id={}, created_by={}",
            job.fields.title, job.company_id, job.created_by
        );

        let row = sqlx::query_as::<_, JobRow>(
            r#"
            INSERT INTO jobs
                (title, description, requirements, salary, experience_level,
                 location, job_type, position, company_id, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&job.fields.title)
        .bind(&job.fields.description)
        .bind(&job.fields.requirements)
        .bind(job.fields.salary)
        .bind(&job.fields.experience_level)
        .bind(&job.fields.location)
        .bind(&job.fields.job_type)
        .bind(job.fields.position)
        .bind(job.company_id)
        .bind(job.created_by)
        .fetch_one(pool)
        .await?;

        debug!("Job created with id={}", row.id);
        Ok(row)
    }

    /// Keyword search over title and description, newest first.
    /// An empty keyword matches every job.
    pub async fn find_all(
        pool: &Pool<Postgres>,
        keyword: &str,
    ) -> Result<Vec<JobRow>, sqlx::Error> {
        let pattern = format!("%{}%", keyword);

        sqlx::query_as::<_, JobRow>(
            r#"
            SELECT * FROM jobs
            WHERE title ILIKE $1 OR description ILIKE $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(&pattern)
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(
        pool: &Pool<Postgres>,
        id: i32,
    ) -> Result<Option<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Jobs posted by the given recruiter
    pub async fn find_by_creator(
        pool: &Pool<Postgres>,
        created_by: i32,
    ) -> Result<Vec<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>(
            "SELECT * FROM jobs WHERE created_by = $1 ORDER BY created_at DESC",
        )
        .bind(created_by)
        .fetch_all(pool)
        .await
    }

    /// Combined existence + ownership lookup for recruiter update/delete
    pub async fn find_by_id_and_creator(
        pool: &Pool<Postgres>,
        id: i32,
        created_by: i32,
    ) -> Result<Option<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(created_by)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_all_unfiltered(pool: &Pool<Postgres>) -> Result<Vec<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_ids(
        pool: &Pool<Postgres>,
        ids: &[i32],
    ) -> Result<Vec<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Replace the editable field set of a job
    pub async fn update(
        pool: &Pool<Postgres>,
        id: i32,
        fields: &JobFields,
    ) -> Result<JobRow, sqlx::Error> {
        debug!("Updating job id={}", id);

        sqlx::query_as::<_, JobRow>(
            r#"
            UPDATE jobs
            SET title = $1,
                description = $2,
                requirements = $3,
                salary = $4,
                experience_level = $5,
                location = $6,
                job_type = $7,
                position = $8,
                updated_at = now()
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(&fields.requirements)
        .bind(fields.salary)
        .bind(&fields.experience_level)
        .bind(&fields.location)
        .bind(&fields.job_type)
        .bind(fields.position)
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Record an application id on the job's application list.
    /// Separate statement from the application insert; not atomic with it.
    pub async fn append_application(
        pool: &Pool<Postgres>,
        job_id: i32,
        application_id: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE jobs SET applications = array_append(applications, $1), updated_at = now() WHERE id = $2",
        )
        .bind(application_id)
        .bind(job_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn delete(pool: &Pool<Postgres>, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
