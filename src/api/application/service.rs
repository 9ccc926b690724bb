use std::collections::HashMap;

use sqlx::{Pool, Postgres};
use tracing::info;

use super::dto::{ApplicantEntry, ApplicantsResponse, AppliedJob};
use super::models::normalize_status;
use crate::api::error::ServiceError;
use crate::api::user::dto::PublicUser;
use crate::db::application_repository::ApplicationRepository;
use crate::db::company_repository::CompanyRepository;
use crate::db::job_repository::JobRepository;
use crate::db::models::ApplicationRow;
use crate::db::user_repository::UserRepository;

/// Application service: applying to jobs and the recruiter's status
/// decisions over applications.
pub struct ApplicationService {
    pool: Pool<Postgres>,
}

impl ApplicationService {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// File an application for the caller.
    ///
    /// At most one application may exist per (job, applicant); the
    /// duplicate check runs before the job existence check. After the
    /// insert, the application id is appended to the job's id list as a
    /// second, independent write.
    pub async fn apply(&self, caller: i32, job_id: i32) -> Result<ApplicationRow, ServiceError> {
        if ApplicationRepository::find_by_job_and_applicant(&self.pool, job_id, caller)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(
                "You have already applied for this job".to_string(),
            ));
        }

        if JobRepository::find_by_id(&self.pool, job_id).await?.is_none() {
            return Err(ServiceError::NotFound("Job not found".to_string()));
        }

        let application = ApplicationRepository::create(&self.pool, job_id, caller).await?;
        JobRepository::append_application(&self.pool, job_id, application.id).await?;

        info!(
            "Service: user {} applied to job {} (application id={})",
            caller, job_id, application.id
        );
        Ok(application)
    }

    /// The caller's applications, newest first, with job and company
    pub async fn applied(&self, caller: i32) -> Result<Vec<AppliedJob>, ServiceError> {
        let applications = ApplicationRepository::find_by_applicant(&self.pool, caller).await?;

        let mut job_ids: Vec<i32> = applications.iter().map(|a| a.job_id).collect();
        job_ids.sort_unstable();
        job_ids.dedup();

        let mut jobs = HashMap::new();
        let mut companies = HashMap::new();
        if !job_ids.is_empty() {
            for job in JobRepository::find_by_ids(&self.pool, &job_ids).await? {
                jobs.insert(job.id, job);
            }
            let mut company_ids: Vec<i32> = jobs.values().map(|j| j.company_id).collect();
            company_ids.sort_unstable();
            company_ids.dedup();
            for company in CompanyRepository::find_by_ids(&self.pool, &company_ids).await? {
                companies.insert(company.id, company);
            }
        }

        Ok(applications
            .into_iter()
            .map(|application| {
                let job = jobs.get(&application.job_id).cloned();
                let company = job
                    .as_ref()
                    .and_then(|j| companies.get(&j.company_id).cloned());
                AppliedJob {
                    application,
                    job,
                    company,
                }
            })
            .collect())
    }

    /// Everyone who applied to a job, newest first
    pub async fn applicants(&self, job_id: i32) -> Result<ApplicantsResponse, ServiceError> {
        let job = JobRepository::find_by_id(&self.pool, job_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Job not found".to_string()))?;

        let applications = if job.applications.is_empty() {
            Vec::new()
        } else {
            ApplicationRepository::find_by_ids(&self.pool, &job.applications).await?
        };

        let mut applicant_ids: Vec<i32> = applications.iter().map(|a| a.applicant_id).collect();
        applicant_ids.sort_unstable();
        applicant_ids.dedup();

        let users = UserRepository::find_by_ids(&self.pool, &applicant_ids).await?;
        let mut by_id: HashMap<i32, PublicUser> =
            users.into_iter().map(|u| (u.id, PublicUser::from(u))).collect();

        let mut entries = Vec::with_capacity(applications.len());
        for application in applications {
            let applicant = by_id.remove(&application.applicant_id);
            entries.push(ApplicantEntry {
                application,
                applicant,
            });
        }

        Ok(ApplicantsResponse {
            job,
            applications: entries,
        })
    }

    /// Store a new status for an application. The value is lowercased
    /// and otherwise taken verbatim.
    pub async fn update_status(
        &self,
        application_id: i32,
        raw_status: &str,
    ) -> Result<ApplicationRow, ServiceError> {
        let status = normalize_status(raw_status);

        let updated = ApplicationRepository::update_status(&self.pool, application_id, &status)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Application not found".to_string()))?;

        info!(
            "Service: application id={} status set to {}",
            updated.id, updated.status
        );
        Ok(updated)
    }
}
