use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::user::dto::PublicUser;
use crate::db::models::{ApplicationRow, CompanyRow, JobRow};

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// One entry of the applicant's own feed: the application with its job
/// and the job's company resolved (either may have been deleted since)
#[derive(Serialize)]
pub struct AppliedJob {
    pub application: ApplicationRow,
    pub job: Option<JobRow>,
    pub company: Option<CompanyRow>,
}

#[derive(Serialize)]
pub struct AppliedJobsResponse {
    pub applications: Vec<AppliedJob>,
}

/// One applicant of a job, as the recruiter sees it
#[derive(Serialize)]
pub struct ApplicantEntry {
    pub application: ApplicationRow,
    pub applicant: Option<PublicUser>,
}

#[derive(Serialize)]
pub struct ApplicantsResponse {
    pub job: JobRow,
    pub applications: Vec<ApplicantEntry>,
}

#[derive(Serialize)]
pub struct ApplicationResponse {
    pub message: String,
    pub application: ApplicationRow,
}
