use serde::{Deserialize, Serialize};
use validator::Validate;

use super::models::UserRole;
use crate::db::models::UserRow;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Fullname is required"))]
    pub fullname: String,

    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    pub role: UserRole,

    /// Already-uploaded photo URL; upload itself happens elsewhere
    pub profile_photo: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    pub role: UserRole,
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    pub fullname: Option<String>,

    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,

    pub phone_number: Option<String>,

    pub bio: Option<String>,

    /// Comma-separated list, split into entries on write
    pub skills: Option<String>,

    pub resume: Option<String>,
    pub resume_original_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub resume: Option<String>,
    pub resume_original_name: Option<String>,
    pub profile_photo: Option<String>,
}

/// User as exposed to clients: everything except the password hash
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i32,
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
    pub profile: Profile,
}

impl From<UserRow> for PublicUser {
    fn from(row: UserRow) -> Self {
        PublicUser {
            id: row.id,
            fullname: row.fullname,
            email: row.email,
            phone_number: row.phone_number,
            role: row.role,
            profile: Profile {
                bio: row.bio,
                skills: row.skills,
                resume: row.resume,
                resume_original_name: row.resume_original_name,
                profile_photo: row.profile_photo,
            },
        }
    }
}

/// Response for login and profile updates
#[derive(Serialize)]
pub struct UserResponse {
    pub message: String,
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_short_password_and_bad_email() {
        let req = RegisterRequest {
            fullname: "Jane Doe".to_string(),
            email: "not-an-email".to_string(),
            phone_number: "123".to_string(),
            password: "abc".to_string(),
            role: UserRole::Student,
            profile_photo: None,
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn public_user_drops_the_password() {
        let row = UserRow {
            id: 1,
            fullname: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "123".to_string(),
            password: "$argon2id$...".to_string(),
            role: "recruiter".to_string(),
            bio: None,
            skills: vec!["rust".to_string()],
            resume: None,
            resume_original_name: None,
            profile_photo: None,
        };
        let json = serde_json::to_value(PublicUser::from(row)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["profile"]["skills"][0], "rust");
    }
}
