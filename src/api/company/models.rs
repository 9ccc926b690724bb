use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Company verification lifecycle. Any value may be set from any other;
/// transitions are not restricted by the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Rejected => "rejected",
        }
    }

    /// The derived `is_verified` flag: true only while approved
    pub fn is_approved(&self) -> bool {
        *self == VerificationStatus::Approved
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(VerificationStatus::Pending),
            "approved" => Ok(VerificationStatus::Approved),
            "rejected" => Ok(VerificationStatus::Rejected),
            _ => Err("Invalid verification status".to_string()),
        }
    }
}

/// Notification text sent to every admin when a company registers
pub fn registration_message(company_name: &str) -> String {
    format!("New company \"{}\" requires verification", company_name)
}

/// Notification text sent to the owner when a decision changes the status
pub fn transition_message(company_name: &str, status: VerificationStatus) -> String {
    let wording = match status {
        VerificationStatus::Approved => "approved",
        VerificationStatus::Rejected => "rejected",
        VerificationStatus::Pending => "set to pending review",
    };
    format!("Your company \"{}\" has been {}", company_name, wording)
}

/// Response message accompanying a verification decision
pub fn decision_message(status: VerificationStatus) -> String {
    let wording = match status {
        VerificationStatus::Approved => "approved",
        VerificationStatus::Rejected => "rejected",
        VerificationStatus::Pending => "set to pending",
    };
    format!("Company {}", wording)
}

/// Notification text sent to the former owner after an admin delete
pub fn deletion_message(company_name: &str) -> String {
    format!(
        "Your company \"{}\" has been deleted by an administrator",
        company_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            VerificationStatus::Pending,
            VerificationStatus::Approved,
            VerificationStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<VerificationStatus>().unwrap(), status);
        }
        assert!("verified".parse::<VerificationStatus>().is_err());
    }

    #[test]
    fn only_approved_derives_verified() {
        assert!(VerificationStatus::Approved.is_approved());
        assert!(!VerificationStatus::Pending.is_approved());
        assert!(!VerificationStatus::Rejected.is_approved());
    }

    #[test]
    fn transition_wording_matches_decision() {
        assert_eq!(
            transition_message("Acme", VerificationStatus::Approved),
            "Your company \"Acme\" has been approved"
        );
        assert_eq!(
            transition_message("Acme", VerificationStatus::Rejected),
            "Your company \"Acme\" has been rejected"
        );
        assert_eq!(
            transition_message("Acme", VerificationStatus::Pending),
            "Your company \"Acme\" has been set to pending review"
        );
    }

    #[test]
    fn registration_message_names_the_company() {
        assert_eq!(
            registration_message("Acme"),
            "New company \"Acme\" requires verification"
        );
    }
}
