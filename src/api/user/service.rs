use sqlx::{Pool, Postgres};
use tracing::info;

use super::dto::{LoginRequest, PublicUser, RegisterRequest, UpdateProfileRequest};
use super::models::{split_comma_list, NewUser};
use crate::api::error::ServiceError;
use crate::auth::{hash_password, verify_password};
use crate::db::user_repository::UserRepository;

/// User service containing registration, login and profile logic
pub struct UserService {
    pool: Pool<Postgres>,
}

impl UserService {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Register a new site user.
    ///
    /// The email must not be taken; the password is stored as an argon2
    /// hash and never echoed back.
    pub async fn register(&self, input: &RegisterRequest) -> Result<(), ServiceError> {
        info!("Service: registering user email={}", input.email);

        if UserRepository::find_by_email(&self.pool, &input.email)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(
                "User already exists with this mail".to_string(),
            ));
        }

        let new_user = NewUser {
            fullname: input.fullname.clone(),
            email: input.email.clone(),
            phone_number: input.phone_number.clone(),
            password: hash_password(&input.password)?,
            role: input.role.as_str().to_string(),
            profile_photo: input.profile_photo.clone(),
        };

        let row = UserRepository::create(&self.pool, &new_user).await?;
        info!("Service: user registered with id={}", row.id);
        Ok(())
    }

    /// Check credentials and the requested role; returns the sanitized
    /// user. Token issuance stays with the handler.
    pub async fn login(&self, input: &LoginRequest) -> Result<PublicUser, ServiceError> {
        let user = UserRepository::find_by_email(&self.pool, &input.email)
            .await?
            .ok_or_else(|| {
                ServiceError::Validation("User not found with this mail".to_string())
            })?;

        if !verify_password(&input.password, &user.password) {
            return Err(ServiceError::Validation(
                "Incorrect email or password".to_string(),
            ));
        }

        if user.role != input.role.as_str() {
            return Err(ServiceError::Validation(
                "No account found with this role".to_string(),
            ));
        }

        info!("Service: user id={} logged in", user.id);
        Ok(PublicUser::from(user))
    }

    /// Partial profile update for the calling user
    pub async fn update_profile(
        &self,
        caller: i32,
        input: &UpdateProfileRequest,
    ) -> Result<PublicUser, ServiceError> {
        let mut user = UserRepository::find_by_id(&self.pool, caller)
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
        if let Some(resume) = &input.resume {
            user.resume = Some(resume.clone());
            user.resume_original_name = input.resume_original_name.clone();
        }

        let updated = UserRepository::update(&self.pool, &user).await?;
        info!("Service: user id={} profile updated", updated.id);
        Ok(PublicUser::from(updated))
    }
}
