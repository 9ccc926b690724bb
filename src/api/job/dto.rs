use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::models::{ApplicationRow, CompanyRow, JobRow};

/// Full field set for posting a job. Everything is required; a missing
/// field fails validation before any write happens.
#[derive(Debug, Deserialize, Validate)]
pub struct PostJobRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Comma-separated text, split into an ordered list on write
    #[validate(length(min = 1, message = "Requirements are required"))]
    pub requirements: String,

    /// Arrives as text and is coerced to a number by the service
    #[validate(length(min = 1, message = "Salary is required"))]
    pub salary: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "Job type is required"))]
    pub job_type: String,

    #[validate(length(min = 1, message = "Experience level is required"))]
    pub experience: String,

    #[validate(range(min = 1, message = "Position count is required"))]
    pub position: i32,

    pub company_id: i32,
}

/// Same field set minus the company, which a job never changes
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Requirements are required"))]
    pub requirements: String,

    #[validate(length(min = 1, message = "Salary is required"))]
    pub salary: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "Job type is required"))]
    pub job_type: String,

    #[validate(length(min = 1, message = "Experience level is required"))]
    pub experience: String,

    #[validate(range(min = 1, message = "Position count is required"))]
    pub position: i32,
}

#[derive(Serialize)]
pub struct JobResponse {
    pub message: String,
    pub job: JobRow,
}

/// Job with its company resolved; None when the company was deleted
/// out from under the job
#[derive(Serialize)]
pub struct JobWithCompany {
    pub job: JobRow,
    pub company: Option<CompanyRow>,
}

#[derive(Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobWithCompany>,
}

/// Job with its applications resolved from the id list
#[derive(Serialize)]
pub struct JobDetail {
    pub job: JobRow,
    pub applications: Vec<ApplicationRow>,
}

#[derive(Serialize)]
pub struct JobDetailResponse {
    pub job: JobDetail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_request() -> PostJobRequest {
        PostJobRequest {
            title: "Backend engineer".to_string(),
            description: "Build the backend".to_string(),
            requirements: "rust,sql".to_string(),
            salary: "120000".to_string(),
            location: "Remote".to_string(),
            job_type: "full-time".to_string(),
            experience: "mid".to_string(),
            position: 2,
            company_id: 1,
        }
    }

    #[test]
    fn complete_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn each_missing_field_fails_validation() {
        let mut req = valid_request();
        req.title = String::new();
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.requirements = String::new();
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.salary = String::new();
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.position = 0;
        assert!(req.validate().is_err());
    }
}
