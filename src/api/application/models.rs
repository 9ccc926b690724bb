/// Applications are stored with whatever status string the recruiter
/// supplies, lowercased. There is deliberately no whitelist; "pending",
/// "accepted" and "rejected" are conventions, not enforced values.
pub fn normalize_status(raw: &str) -> String {
    raw.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_lowercased_verbatim() {
        assert_eq!(normalize_status("Accepted"), "accepted");
        assert_eq!(normalize_status("REJECTED"), "rejected");
        assert_eq!(normalize_status("Shortlisted For Interview"), "shortlisted for interview");
    }
}
