use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::user::dto::PublicUser;
use crate::db::models::{CompanyRow, JobRow, UserRow};

#[derive(Debug, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin-side partial user update (no resume handling here)
#[derive(Debug, Deserialize, Validate)]
pub struct AdminUpdateUserRequest {
    pub fullname: Option<String>,

    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,

    pub phone_number: Option<String>,

    pub bio: Option<String>,

    /// Comma-separated list, split into entries on write
    pub skills: Option<String>,
}

#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<PublicUser>,
}

/// Company projection for the admin job board: identity and ownership
/// columns are withheld
#[derive(Serialize)]
pub struct AdminCompanyView {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub verification_status: String,
    pub is_verified: bool,
}

impl From<CompanyRow> for AdminCompanyView {
    fn from(row: CompanyRow) -> Self {
        AdminCompanyView {
            name: row.name,
            description: row.description,
            website: row.website,
            location: row.location,
            verification_status: row.verification_status,
            is_verified: row.is_verified,
        }
    }
}

/// Creator projection for the admin job board: contact columns only
#[derive(Serialize)]
pub struct AdminUserView {
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
}

impl From<UserRow> for AdminUserView {
    fn from(row: UserRow) -> Self {
        AdminUserView {
            fullname: row.fullname,
            email: row.email,
            phone_number: row.phone_number,
            role: row.role,
        }
    }
}

#[derive(Serialize)]
pub struct AdminJobView {
    pub job: JobRow,
    pub company: AdminCompanyView,
    pub user: AdminUserView,
}

#[derive(Serialize)]
pub struct AdminJobsResponse {
    pub jobs: Vec<AdminJobView>,
}

#[derive(Serialize)]
pub struct AdminLoginResponse {
    pub message: String,
}
