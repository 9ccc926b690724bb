use actix_web::{HttpResponse, ResponseError};
use std::fmt;
use tracing::{error, warn};

use crate::api::validation::ErrorResponse;

/// Service-level errors shared by every workflow.
///
/// Workflows never let a persistence failure escape un-mapped: anything
/// unexpected is caught at the service boundary and carried here as
/// `Database`. Handlers translate the variant into an HTTP response via
/// the `ResponseError` impl below and do no error branching of their own.
#[derive(Debug)]
pub enum ServiceError {
    /// Missing or malformed input; no persistence side effect occurred
    Validation(String),

    /// Missing, expired or malformed credentials
    Unauthorized(String),

    /// Caller is authenticated but not allowed to act on this resource
    Forbidden(String),

    /// Job posting attempted against a company that is not approved.
    /// Carries the company's current verification status so the caller
    /// can explain the denial.
    UnverifiedCompany { verification_status: String },

    /// A referenced id did not resolve
    NotFound(String),

    /// The operation would violate an at-most-one rule (duplicate company
    /// name, repeated application, ...); nothing was written
    Conflict(String),

    /// Database operation failed
    Database(sqlx::Error),

    /// Non-database internal failure (token signing and the like)
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ServiceError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ServiceError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ServiceError::UnverifiedCompany { verification_status } => {
                write!(f, "Company not approved (status: {})", verification_status)
            }
            ServiceError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ServiceError::Database(e) => write!(f, "Database error: {}", e),
            ServiceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Database(e)
    }
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Validation(msg) => {
                warn!("Validation error: {}", msg);
                HttpResponse::BadRequest().json(ErrorResponse {
                    error: "Validation failed".to_string(),
                    fields: serde_json::json!({"message": msg}),
                })
            }
            ServiceError::Unauthorized(msg) => {
                warn!("Unauthorized: {}", msg);
                HttpResponse::Unauthorized().json(ErrorResponse {
                    error: "Authentication required".to_string(),
                    fields: serde_json::json!({"message": msg}),
                })
            }
            ServiceError::Forbidden(msg) => {
                warn!("Forbidden: {}", msg);
                HttpResponse::Forbidden().json(ErrorResponse {
                    error: "Access denied".to_string(),
                    fields: serde_json::json!({"message": msg}),
                })
            }
            ServiceError::UnverifiedCompany { verification_status } => {
                warn!("Job posting blocked: company status={}", verification_status);
                HttpResponse::Forbidden().json(ErrorResponse {
                    error: "Access denied".to_string(),
                    fields: serde_json::json!({
                        "message": "Cannot post jobs for unapproved companies. Please wait for admin verification.",
                        "verificationStatus": verification_status,
                    }),
                })
            }
            ServiceError::NotFound(msg) => {
                warn!("Not found: {}", msg);
                HttpResponse::NotFound().json(ErrorResponse {
                    error: "Not found".to_string(),
                    fields: serde_json::json!({"message": msg}),
                })
            }
            ServiceError::Conflict(msg) => {
                warn!("Conflict: {}", msg);
                HttpResponse::Conflict().json(ErrorResponse {
                    error: "Conflict".to_string(),
                    fields: serde_json::json!({"message": msg}),
                })
            }
            ServiceError::Database(e) => {
                error!("Database error: {}", e);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Failed to process request".to_string(),
                    fields: serde_json::json!({"message": "Database error occurred"}),
                })
            }
            ServiceError::Internal(msg) => {
                error!("Internal error: {}", msg);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Failed to process request".to_string(),
                    fields: serde_json::json!({"message": "Internal error occurred"}),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ServiceError::Validation("x".into()).error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Unauthorized("x".into()).error_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::Forbidden("x".into()).error_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ServiceError::NotFound("x".into()).error_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Conflict("x".into()).error_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::Database(sqlx::Error::RowNotFound)
                .error_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unverified_company_carries_the_current_status() {
        let err = ServiceError::UnverifiedCompany {
            verification_status: "pending".to_string(),
        };
        assert_eq!(err.error_response().status(), StatusCode::FORBIDDEN);
        assert!(err.to_string().contains("pending"));
    }
}
