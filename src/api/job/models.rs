/// Editable field set shared by job creation and update
#[derive(Debug, Clone)]
pub struct JobFields {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: i64,
    pub experience_level: String,
    pub location: String,
    pub job_type: String,
    pub position: i32,
}

/// Insert shape for a new job, assembled by the service after the
/// company eligibility gate has passed
#[derive(Debug)]
pub struct NewJob {
    pub fields: JobFields,
    pub company_id: i32,
    pub created_by: i32,
}

/// Split comma-separated requirements text into an ordered list
pub fn split_requirements(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Coerce the salary field, which arrives as text, into a number
pub fn coerce_salary(raw: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| "Salary must be a number".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_keep_their_order() {
        assert_eq!(
            split_requirements("rust, 3 years experience,remote ok"),
            vec![
                "rust".to_string(),
                "3 years experience".to_string(),
                "remote ok".to_string()
            ]
        );
    }

    #[test]
    fn salary_coercion_accepts_digits_only() {
        assert_eq!(coerce_salary("120000").unwrap(), 120_000);
        assert_eq!(coerce_salary(" 95000 ").unwrap(), 95_000);
        assert!(coerce_salary("90k").is_err());
        assert!(coerce_salary("").is_err());
    }
}
