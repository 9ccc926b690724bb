use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Site user roles. Back-office admins are a separate account type;
/// users with the `admin` role receive verification notifications and
/// may read the admin notification feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Recruiter,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Recruiter => "recruiter",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "recruiter" => Ok(UserRole::Recruiter),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Insert shape for a new user, assembled by the service after hashing
pub struct NewUser {
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    /// argon2 PHC string, never the raw password
    pub password: String,
    pub role: String,
    pub profile_photo: Option<String>,
}

/// Split comma-separated profile input ("rust, sql,tokio") into entries
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        for role in [UserRole::Student, UserRole::Recruiter, UserRole::Admin] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("manager".parse::<UserRole>().is_err());
    }

    #[test]
    fn comma_list_splits_and_trims() {
        assert_eq!(
            split_comma_list("rust, sql,tokio"),
            vec!["rust".to_string(), "sql".to_string(), "tokio".to_string()]
        );
        assert_eq!(split_comma_list(""), Vec::<String>::new());
        assert_eq!(split_comma_list("a,,b"), vec!["a".to_string(), "b".to_string()]);
    }
}
