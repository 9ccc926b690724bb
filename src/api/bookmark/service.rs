use std::collections::HashMap;

use sqlx::{Pool, Postgres};
use tracing::info;

use super::dto::BookmarkedJob;
use crate::api::error::ServiceError;
use crate::db::bookmark_repository::BookmarkRepository;
use crate::db::company_repository::CompanyRepository;
use crate::db::job_repository::JobRepository;

/// Bookmark service: a single toggle operation plus read views.
/// Callers cannot express add/remove intent, only flip the state.
pub struct BookmarkService {
    pool: Pool<Postgres>,
}

impl BookmarkService {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Flip the bookmark state for (caller, job). Returns true when the
    /// call created a bookmark, false when it removed one.
    pub async fn toggle(&self, caller: i32, job_id: i32) -> Result<bool, ServiceError> {
        if JobRepository::find_by_id(&self.pool, job_id).await?.is_none() {
            return Err(ServiceError::NotFound("Job not found".to_string()));
        }

        match BookmarkRepository::find_by_user_and_job(&self.pool, caller, job_id).await? {
            Some(existing) => {
                BookmarkRepository::delete(&self.pool, existing.id).await?;
                info!("Service: user {} un-bookmarked job {}", caller, job_id);
                Ok(false)
            }
            None => {
                BookmarkRepository::create(&self.pool, caller, job_id).await?;
                info!("Service: user {} bookmarked job {}", caller, job_id);
                Ok(true)
            }
        }
    }

    /// The caller's saved jobs, newest first, with job and company
    pub async fn list(&self, caller: i32) -> Result<Vec<BookmarkedJob>, ServiceError> {
        let bookmarks = BookmarkRepository::find_by_user(&self.pool, caller).await?;

        let mut job_ids: Vec<i32> = bookmarks.iter().map(|b| b.job_id).collect();
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

        Ok(bookmarks
            .into_iter()
            .map(|bookmark| {
                let job = jobs.get(&bookmark.job_id).cloned();
                let company = job
                    .as_ref()
                    .and_then(|j| companies.get(&j.company_id).cloned());
                BookmarkedJob {
                    bookmark,
                    job,
                    company,
                }
            })
            .collect())
    }

    pub async fn is_bookmarked(&self, caller: i32, job_id: i32) -> Result<bool, ServiceError> {
        Ok(
            BookmarkRepository::find_by_user_and_job(&self.pool, caller, job_id)
                .await?
                .is_some(),
        )
    }
}
