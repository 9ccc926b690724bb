use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::models::CompanyRow;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterCompanyRequest {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
}

/// Partial company profile update; absent fields are left untouched
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    /// Already-uploaded logo URL; upload itself happens elsewhere
    pub logo: Option<String>,
}

/// Admin decision payload. The status arrives as a raw string and is
/// validated in the service so the error message stays in one place.
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyCompanyRequest {
    #[validate(length(min = 1, message = "Verification status is required"))]
    pub verification_status: String,
}

#[derive(Serialize)]
pub struct CompanyResponse {
    pub message: String,
    pub company: CompanyRow,
}

#[derive(Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<CompanyRow>,
}

/// Owner-facing view of where verification stands
#[derive(Serialize)]
pub struct VerificationStatusResponse {
    pub verification_status: String,
    pub is_verified: bool,
    pub company: CompanyRow,
}
