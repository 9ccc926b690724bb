use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Database representation of a site user.
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// response body. Handlers go through `api::user::dto::PublicUser`.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub role: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub resume: Option<String>,
    pub resume_original_name: Option<String>,
    pub profile_photo: Option<String>,
}

/// Back-office admin account. Not `Serialize` for the same reason as UserRow.
#[derive(Debug, Clone, FromRow)]
pub struct AdminRow {
    pub id: i32,
    pub email: String,
    pub password: String,
}

/// Database representation of a company.
///
/// `is_verified` is derived state: true iff verification_status is
/// "approved". Every status write re-establishes the pairing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompanyRow {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub verification_status: String,
    pub is_verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database representation of a job posting.
///
/// `applications` is an explicit id list appended to after each apply;
/// the append is a separate statement from the application insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: i64,
    pub experience_level: String,
    pub location: String,
    pub job_type: String,
    pub position: i32,
    pub company_id: i32,
    pub created_by: i32,
    pub applications: Vec<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database representation of a job application.
///
/// `status` is a free-form lowercased string ("pending" at creation).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationRow {
    pub id: i32,
    pub job_id: i32,
    pub applicant_id: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookmarkRow {
    pub id: i32,
    pub user_id: i32,
    pub job_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database representation of a notification.
///
/// `target_model` + `target_id` persist the tagged target union; use
/// `api::notification::NotificationTarget::from_parts` to interpret them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationRow {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub target_model: String,
    pub target_id: i32,
    pub user_id: i32,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
