use sqlx::{Pool, Postgres};
use tracing::{info, warn};

use super::dto::{RegisterCompanyRequest, UpdateCompanyRequest, VerificationStatusResponse};
use super::models::{
    decision_message, deletion_message, registration_message, transition_message,
    VerificationStatus,
};
use crate::api::error::ServiceError;
use crate::api::notification::models::{NotificationTarget, NotificationType};
use crate::api::user::UserRole;
use crate::db::company_repository::CompanyRepository;
use crate::db::models::CompanyRow;
use crate::db::notification_repository::NotificationRepository;
use crate::db::user_repository::UserRepository;

/// Company service: registration, profile upkeep, and the verification
/// workflow that gates job posting.
pub struct CompanyService {
    pool: Pool<Postgres>,
}

impl CompanyService {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Register a company for the calling recruiter.
    ///
    /// Verification always starts out pending. After the insert, one
    /// notification per admin user is created so somebody reviews it.
    /// The fan-out is a separate step: the company is never rolled back
    /// on a notification failure.
    pub async fn register(
        &self,
        caller: i32,
        input: &RegisterCompanyRequest,
    ) -> Result<CompanyRow, ServiceError> {
        info!("Service: registering company name={}", input.company_name);

        if CompanyRepository::find_by_name(&self.pool, &input.company_name)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(
                "Can't register same company".to_string(),
            ));
        }

        let company = CompanyRepository::create(&self.pool, &input.company_name, caller).await?;

        let admins =
            UserRepository::find_by_role(&self.pool, UserRole::Admin.as_str()).await?;
        if admins.is_empty() {
            warn!(
                "Service: no admin users to notify about company id={}",
                company.id
            );
        }
        // Fire-and-forget fan-out: the company stands even if a
        // notification write fails.
        for admin in &admins {
            if let Err(e) = NotificationRepository::create(
                &self.pool,
                NotificationType::CompanyVerification,
                &registration_message(&company.name),
                NotificationTarget::Company(company.id),
                admin.id,
            )
            .await
            {
                warn!(
                    "Service: failed to notify admin {} about company {}: {}",
                    admin.id, company.id, e
                );
            }
        }

        info!(
            "Service: company id={} registered, {} admins notified",
            company.id,
            admins.len()
        );
        Ok(company)
    }

    /// Companies owned by the calling recruiter
    pub async fn my_companies(&self, caller: i32) -> Result<Vec<CompanyRow>, ServiceError> {
        let companies = CompanyRepository::find_by_user(&self.pool, caller).await?;
        if companies.is_empty() {
            return Err(ServiceError::NotFound("Companies not found".to_string()));
        }
        Ok(companies)
    }

    pub async fn by_id(&self, company_id: i32) -> Result<CompanyRow, ServiceError> {
        CompanyRepository::find_by_id(&self.pool, company_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Company not found".to_string()))
    }

    /// Owner-only partial update of company profile fields
    pub async fn update(
        &self,
        caller: i32,
        company_id: i32,
        input: &UpdateCompanyRequest,
    ) -> Result<CompanyRow, ServiceError> {
        let mut company = self.by_id(company_id).await?;

        if company.user_id != caller {
            return Err(ServiceError::Forbidden(
                "You don't have permission to edit this company".to_string(),
            ));
        }

        if let Some(name) = &input.name {
            company.name = name.clone();
        }
        if let Some(description) = &input.description {
            company.description = Some(description.clone());
        }
        if let Some(website) = &input.website {
            company.website = Some(website.clone());
        }
        if let Some(location) = &input.location {
            company.location = Some(location.clone());
        }
        if let Some(logo) = &input.logo {
            company.logo = Some(logo.clone());
        }

        let updated = CompanyRepository::update(&self.pool, &company).await?;
        info!("Service: company id={} updated", updated.id);
        Ok(updated)
    }

    /// Where verification stands, visible only to the owner
    pub async fn verification_status(
        &self,
        caller: i32,
        company_id: i32,
    ) -> Result<VerificationStatusResponse, ServiceError> {
        let company = self.by_id(company_id).await?;

        if company.user_id != caller {
            return Err(ServiceError::Forbidden(
                "You don't have permission to view this company's status".to_string(),
            ));
        }

        Ok(VerificationStatusResponse {
            verification_status: company.verification_status.clone(),
            is_verified: company.is_verified,
            company,
        })
    }

    /// Every company, for the admin review board
    pub async fn all(&self) -> Result<Vec<CompanyRow>, ServiceError> {
        let companies = CompanyRepository::find_all(&self.pool).await?;
        if companies.is_empty() {
            return Err(ServiceError::NotFound("No companies found".to_string()));
        }
        Ok(companies)
    }

    /// Companies still awaiting a decision; may be empty
    pub async fn pending(&self) -> Result<Vec<CompanyRow>, ServiceError> {
        Ok(CompanyRepository::find_pending(&self.pool).await?)
    }

    /// Apply a verification decision.
    ///
    /// Any of the three statuses may be requested regardless of the
    /// current one. The owner is notified only when the status actually
    /// changes; the write itself happens unconditionally and keeps
    /// is_verified in sync with the status.
    pub async fn verify(
        &self,
        admin: i32,
        company_id: i32,
        raw_status: &str,
    ) -> Result<(String, CompanyRow), ServiceError> {
        let status: VerificationStatus = raw_status
            .parse()
            .map_err(ServiceError::Validation)?;

        let company = self.by_id(company_id).await?;

        // The owner hears about the decision only when it changes the
        // status; the write below happens either way.
        if company.verification_status != status.as_str() {
            if let Err(e) = NotificationRepository::create(
                &self.pool,
                NotificationType::CompanyVerification,
                &transition_message(&company.name, status),
                NotificationTarget::Company(company.id),
                company.user_id,
            )
            .await
            {
                warn!(
                    "Service: failed to notify owner {} about company {}: {}",
                    company.user_id, company.id, e
                );
            }
        }

        let updated = CompanyRepository::set_verification(&self.pool, company_id, status)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Company not found".to_string()))?;

        info!(
            "Service: company id={} verification set to {} by admin {}",
            updated.id,
            status.as_str(),
            admin
        );
        Ok((decision_message(status), updated))
    }

    /// Remove a company and tell the former owner.
    ///
    /// Jobs, applications and bookmarks pointing at the company are left
    /// in place; readers treat the missing company as absent data.
    pub async fn delete(&self, admin: i32, company_id: i32) -> Result<(), ServiceError> {
        let company = self.by_id(company_id).await?;

        CompanyRepository::delete(&self.pool, company_id).await?;

        if let Err(e) = NotificationRepository::create(
            &self.pool,
            NotificationType::CompanyVerification,
            &deletion_message(&company.name),
            NotificationTarget::Company(company.id),
            company.user_id,
        )
        .await
        {
            warn!(
                "Service: failed to notify owner {} about deleted company {}: {}",
                company.user_id, company.id, e
            );
        }

        info!("Service: company id={} deleted by admin {}", company_id, admin);
        Ok(())
    }
}
