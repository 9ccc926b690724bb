use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event categories a notification can describe.
///
/// `JobPosted` and `ApplicationReceived` are declared for parity with
/// the read side but no workflow currently emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    CompanyVerification,
    JobPosted,
    ApplicationReceived,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::CompanyVerification => "company_verification",
            NotificationType::JobPosted => "job_posted",
            NotificationType::ApplicationReceived => "application_received",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company_verification" => Ok(NotificationType::CompanyVerification),
            "job_posted" => Ok(NotificationType::JobPosted),
            "application_received" => Ok(NotificationType::ApplicationReceived),
            other => Err(format!("Unknown notification type: {}", other)),
        }
    }
}

/// What a notification points at. A tagged union instead of a raw
/// id-plus-model pair, so an id can never carry the wrong model name.
/// Persisted as the (target_model, target_id) column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTarget {
    Company(i32),
    Job(i32),
    Application(i32),
}

impl NotificationTarget {
    /// Discriminator as stored in the target_model column
    pub fn model(&self) -> &'static str {
        match self {
            NotificationTarget::Company(_) => "Company",
            NotificationTarget::Job(_) => "Job",
            NotificationTarget::Application(_) => "Application",
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            NotificationTarget::Company(id)
            | NotificationTarget::Job(id)
            | NotificationTarget::Application(id) => *id,
        }
    }

    /// Rebuild the union from stored columns; an unknown model name is
    /// a data error, not a panic
    pub fn from_parts(model: &str, id: i32) -> Result<Self, String> {
        match model {
            "Company" => Ok(NotificationTarget::Company(id)),
            "Job" => Ok(NotificationTarget::Job(id)),
            "Application" => Ok(NotificationTarget::Application(id)),
            other => Err(format!("Unknown notification target model: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_round_trips_through_columns() {
        for target in [
            NotificationTarget::Company(3),
            NotificationTarget::Job(5),
            NotificationTarget::Application(9),
        ] {
            let rebuilt = NotificationTarget::from_parts(target.model(), target.id()).unwrap();
            assert_eq!(rebuilt, target);
        }
    }

    #[test]
    fn unknown_target_model_is_an_error() {
        assert!(NotificationTarget::from_parts("User", 1).is_err());
    }

    #[test]
    fn type_round_trips_through_strings() {
        for kind in [
            NotificationType::CompanyVerification,
            NotificationType::JobPosted,
            NotificationType::ApplicationReceived,
        ] {
            assert_eq!(kind.as_str().parse::<NotificationType>().unwrap(), kind);
        }
    }
}
