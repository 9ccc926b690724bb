use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::api::company::models::VerificationStatus;
use crate::db::models::CompanyRow;

/// Repository for Company database operations
pub struct CompanyRepository;

impl CompanyRepository {
    /// Insert a new company; verification always starts out pending
    pub async fn create(
        pool: &Pool<Postgres>,
        name: &str,
        user_id: i32,
    ) -> Result<CompanyRow, sqlx::Error> {
        debug!("Creating company: name={}, user_id={}", name, user_id);

        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            INSERT INTO companies (name, user_id, verification_status, is_verified)
            VALUES ($1, $2, $3, FALSE)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(user_id)
        .bind(VerificationStatus::Pending.as_str())
        .fetch_one(pool)
        .await?;

        debug!("Company created with id={}", row.id);
        Ok(row)
    }

    /// Case-sensitive exact-match lookup used for duplicate detection
    pub async fn find_by_name(
        pool: &Pool<Postgres>,
        name: &str,
    ) -> Result<Option<CompanyRow>, sqlx::Error> {
        sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &Pool<Postgres>,
        id: i32,
    ) -> Result<Option<CompanyRow>, sqlx::Error> {
        sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_ids(
        pool: &Pool<Postgres>,
        ids: &[i32],
    ) -> Result<Vec<CompanyRow>, sqlx::Error> {
        sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Companies owned by the given recruiter
    pub async fn find_by_user(
        pool: &Pool<Postgres>,
        user_id: i32,
    ) -> Result<Vec<CompanyRow>, sqlx::Error> {
        sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_all(pool: &Pool<Postgres>) -> Result<Vec<CompanyRow>, sqlx::Error> {
        sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    pub async fn find_pending(pool: &Pool<Postgres>) -> Result<Vec<CompanyRow>, sqlx::Error> {
        sqlx::query_as::<_, CompanyRow>(
            "SELECT * FROM companies WHERE verification_status = $1 ORDER BY created_at DESC",
        )
        .bind(VerificationStatus::Pending.as_str())
        .fetch_all(pool)
        .await
    }

    /// Write back the mutable profile fields of an already-loaded company
    pub async fn update(
        pool: &Pool<Postgres>,
        company: &CompanyRow,
    ) -> Result<CompanyRow, sqlx::Error> {
        debug!("Updating company id={}", company.id);

        sqlx::query_as::<_, CompanyRow>(
            r#"
            UPDATE companies
            SET name = $1,
                description = $2,
                website = $3,
                location = $4,
                logo = $5,
                updated_at = now()
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&company.name)
        .bind(&company.description)
        .bind(&company.website)
        .bind(&company.location)
        .bind(&company.logo)
        .bind(company.id)
        .fetch_one(pool)
        .await
    }

    /// Persist a verification decision together with the derived flag.
    /// is_verified must be true iff status is approved.
    pub async fn set_verification(
        pool: &Pool<Postgres>,
        id: i32,
        status: VerificationStatus,
    ) -> Result<Option<CompanyRow>, sqlx::Error> {
        debug!("Setting verification for company id={}: {}", id, status.as_str());

        sqlx::query_as::<_, CompanyRow>(
            r#"
            UPDATE companies
            SET verification_status = $1,
                is_verified = $2,
                updated_at = now()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(status.as_str())
        .bind(status.is_approved())
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &Pool<Postgres>, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
