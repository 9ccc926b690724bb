use std::collections::HashMap;

use sqlx::{Pool, Postgres};
use tracing::info;

use super::dto::{JobDetail, JobWithCompany, PostJobRequest, UpdateJobRequest};
use super::models::{coerce_salary, split_requirements, JobFields, NewJob};
use crate::api::company::VerificationStatus;
use crate::api::error::ServiceError;
use crate::db::application_repository::ApplicationRepository;
use crate::db::company_repository::CompanyRepository;
use crate::db::job_repository::JobRepository;
use crate::db::models::JobRow;

/// Job service: posting (behind the company verification gate), search
/// and recruiter-side upkeep.
pub struct JobService {
    pool: Pool<Postgres>,
}

impl JobService {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Post a job under a company owned by the caller.
    ///
    /// The company must be approved: both the derived flag and the
    /// status string are checked, and a rejection carries the current
    /// status so the caller can explain the block. No notification is
    /// emitted for new postings.
    pub async fn post(&self, caller: i32, input: &PostJobRequest) -> Result<JobRow, ServiceError> {
        info!("Service: posting job title={} company_id={}", input.title, input.company_id);

        let company = CompanyRepository::find_by_id(&self.pool, input.company_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Company not found".to_string()))?;

        if !company.is_verified
            || company.verification_status != VerificationStatus::Approved.as_str()
        {
            return Err(ServiceError::UnverifiedCompany {
                verification_status: company.verification_status,
            });
        }

        let job = NewJob {
            fields: JobFields {
                title: input.title.clone(),
                description: input.description.clone(),
                requirements: split_requirements(&input.requirements),
                salary: coerce_salary(&input.salary).map_err(ServiceError::Validation)?,
                experience_level: input.experience.clone(),
                location: input.location.clone(),
                job_type: input.job_type.clone(),
                position: input.position,
            },
            company_id: input.company_id,
            created_by: caller,
        };

        let row = JobRepository::create(&self.pool, &job).await?;
        info!("Service: job created with id={}", row.id);
        Ok(row)
    }

    /// Keyword search over all jobs, newest first, companies attached
    pub async fn all(&self, keyword: &str) -> Result<Vec<JobWithCompany>, ServiceError> {
        let jobs = JobRepository::find_all(&self.pool, keyword).await?;
        if jobs.is_empty() {
            return Err(ServiceError::NotFound("Jobs not found".to_string()));
        }
        self.attach_companies(jobs).await
    }

    /// One job with its applications resolved
    pub async fn by_id(&self, job_id: i32) -> Result<JobDetail, ServiceError> {
        let job = JobRepository::find_by_id(&self.pool, job_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Job not found".to_string()))?;

        let applications = if job.applications.is_empty() {
            Vec::new()
        } else {
            ApplicationRepository::find_by_ids(&self.pool, &job.applications).await?
        };

        Ok(JobDetail { job, applications })
    }

    /// Jobs posted by the calling recruiter
    pub async fn mine(&self, caller: i32) -> Result<Vec<JobWithCompany>, ServiceError> {
        let jobs = JobRepository::find_by_creator(&self.pool, caller).await?;
        if jobs.is_empty() {
            return Err(ServiceError::NotFound("Jobs not found".to_string()));
        }
        self.attach_companies(jobs).await
    }

    /// Replace the editable fields of a job the caller created.
    /// Existence and ownership are one combined lookup, so a foreign
    /// job is indistinguishable from a missing one.
    pub async fn update(
        &self,
        caller: i32,
        job_id: i32,
        input: &UpdateJobRequest,
    ) -> Result<JobRow, ServiceError> {
        JobRepository::find_by_id_and_creator(&self.pool, job_id, caller)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(
                    "Job not found or you don't have permission to edit this job".to_string(),
                )
            })?;

        let fields = JobFields {
            title: input.title.clone(),
            description: input.description.clone(),
            requirements: split_requirements(&input.requirements),
            salary: coerce_salary(&input.salary).map_err(ServiceError::Validation)?,
            experience_level: input.experience.clone(),
            location: input.location.clone(),
            job_type: input.job_type.clone(),
            position: input.position,
        };

        let updated = JobRepository::update(&self.pool, job_id, &fields).await?;
        info!("Service: job id={} updated", updated.id);
        Ok(updated)
    }

    /// Delete a job the caller created (same combined lookup as update)
    pub async fn delete(&self, caller: i32, job_id: i32) -> Result<(), ServiceError> {
        JobRepository::find_by_id_and_creator(&self.pool, job_id, caller)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(
                    "Job not found or you don't have permission to delete this job".to_string(),
                )
            })?;

        JobRepository::delete(&self.pool, job_id).await?;
        info!("Service: job id={} deleted", job_id);
        Ok(())
    }

    /// Resolve each job's company; a dangling company_id yields None
    async fn attach_companies(
        &self,
        jobs: Vec<JobRow>,
    ) -> Result<Vec<JobWithCompany>, ServiceError> {
        let mut company_ids: Vec<i32> = jobs.iter().map(|j| j.company_id).collect();
        company_ids.sort_unstable();
        company_ids.dedup();

        let companies = CompanyRepository::find_by_ids(&self.pool, &company_ids).await?;
        let by_id: HashMap<i32, _> = companies.into_iter().map(|c| (c.id, c)).collect();

        Ok(jobs
            .into_iter()
            .map(|job| {
                let company = by_id.get(&job.company_id).cloned();
                JobWithCompany { job, company }
            })
            .collect())
    }
}
