use std::collections::HashMap;

use sqlx::{Pool, Postgres};
use tracing::info;

use super::dto::{AdminJobView, AdminLoginRequest, AdminUpdateUserRequest};
use crate::api::error::ServiceError;
use crate::api::user::dto::PublicUser;
use crate::api::user::models::split_comma_list;
use crate::db::admin_repository::AdminRepository;
use crate::db::company_repository::CompanyRepository;
use crate::db::job_repository::JobRepository;
use crate::db::models::AdminRow;
use crate::db::user_repository::UserRepository;

/// Back-office service: admin login plus user and job administration.
pub struct AdminService {
    pool: Pool<Postgres>,
}

impl AdminService {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Check back-office credentials. Admin passwords are stored and
    /// compared as plain strings; these accounts are provisioned by
    /// operators, not self-service.
    pub async fn login(&self, input: &AdminLoginRequest) -> Result<AdminRow, ServiceError> {
        let admin = AdminRepository::find_by_email(&self.pool, &input.email)
            .await?
            .ok_or_else(|| {
                ServiceError::Validation("Admin not found with this email".to_string())
            })?;

        if admin.password != input.password {
            return Err(ServiceError::Validation("Incorrect password".to_string()));
        }

        info!("Service: admin id={} logged in", admin.id);
        Ok(admin)
    }

    /// Every site user, sanitized
    pub async fn users(&self) -> Result<Vec<PublicUser>, ServiceError> {
        let users = UserRepository::find_all(&self.pool).await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }

    /// Admin-side partial update of a user's profile
    pub async fn update_user(
        &self,
        user_id: i32,
        input: &AdminUpdateUserRequest,
    ) -> Result<PublicUser, ServiceError> {
        let mut user = UserRepository::find_by_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        if let Some(fullname) = &input.fullname {
            user.fullname = fullname.clone();
        }
        if let Some(email) = &input.email {
            user.email = email.clone();
        }
        if let Some(phone_number) = &input.phone_number {
            user.phone_number = phone_number.clone();
        }
        if let Some(bio) = &input.bio {
            user.bio = Some(bio.clone());
        }
        if let Some(skills) = &input.skills {
            user.skills = split_comma_list(skills);
        }

        let updated = UserRepository::update(&self.pool, &user).await?;
        info!("Service: admin updated user id={}", updated.id);
        Ok(PublicUser::from(updated))
    }

    pub async fn delete_user(&self, caller: i32, user_id: i32) -> Result<(), ServiceError> {
        let deleted = UserRepository::delete(&self.pool, user_id).await?;
        if deleted == 0 {
            return Err(ServiceError::NotFound("User not found".to_string()));
        }
        info!("Service: admin {} deleted user id={}", caller, user_id);
        Ok(())
    }

    /// Every job joined with its company and creator, projected for the
    /// admin board. Jobs whose company or creator no longer resolves
    /// are omitted.
    pub async fn jobs(&self) -> Result<Vec<AdminJobView>, ServiceError> {
        let jobs = JobRepository::find_all_unfiltered(&self.pool).await?;

        let mut company_ids: Vec<i32> = jobs.iter().map(|j| j.company_id).collect();
        company_ids.sort_unstable();
        company_ids.dedup();
        let mut user_ids: Vec<i32> = jobs.iter().map(|j| j.created_by).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let companies: HashMap<i32, _> = CompanyRepository::find_by_ids(&self.pool, &company_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let users: HashMap<i32, _> = UserRepository::find_by_ids(&self.pool, &user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(jobs
            .into_iter()
            .filter_map(|job| {
                let company = companies.get(&job.company_id).cloned()?;
                let user = users.get(&job.created_by).cloned()?;
                Some(AdminJobView {
                    job,
                    company: company.into(),
                    user: user.into(),
                })
            })
            .collect())
    }

    /// Delete any job by id alone; the admin path carries no ownership
    /// check, unlike the recruiter path.
    pub async fn delete_job(&self, caller: i32, job_id: i32) -> Result<(), ServiceError> {
        let deleted = JobRepository::delete(&self.pool, job_id).await?;
        if deleted == 0 {
            return Err(ServiceError::NotFound("Job not found".to_string()));
        }
        info!("Service: admin {} deleted job id={}", caller, job_id);
        Ok(())
    }
}
