use sqlx::{Pool, Postgres};
use tracing::info;

use super::dto::CreateNotificationRequest;
use super::models::NotificationTarget;
use crate::api::error::ServiceError;
use crate::api::user::UserRole;
use crate::db::models::NotificationRow;
use crate::db::notification_repository::NotificationRepository;
use crate::db::user_repository::UserRepository;

/// Notification service: per-user feeds and read-state upkeep.
/// Workflow side effects write through the repository directly; this
/// service fronts the HTTP surface.
pub struct NotificationService {
    pool: Pool<Postgres>,
}

impl NotificationService {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Internal create endpoint
    pub async fn create(
        &self,
        input: &CreateNotificationRequest,
    ) -> Result<NotificationRow, ServiceError> {
        let target = NotificationTarget::from_parts(&input.target_model, input.target_id)
            .map_err(ServiceError::Validation)?;

        let row = NotificationRepository::create(
            &self.pool,
            input.kind,
            &input.message,
            target,
            input.user_id,
        )
        .await?;

        info!("Service: notification id={} created", row.id);
        Ok(row)
    }

    /// The caller's feed, newest first
    pub async fn for_user(&self, caller: i32) -> Result<Vec<NotificationRow>, ServiceError> {
        Ok(NotificationRepository::find_by_user(&self.pool, caller).await?)
    }

    /// The combined feed of every admin-role user. Restricted to
    /// admin-role callers.
    pub async fn for_admins(&self, caller: i32) -> Result<Vec<NotificationRow>, ServiceError> {
        let user = UserRepository::find_by_id(&self.pool, caller)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        if user.role != UserRole::Admin.as_str() {
            return Err(ServiceError::Forbidden(
                "Access denied. Admin privileges required.".to_string(),
            ));
        }

        let admins = UserRepository::find_by_role(&self.pool, UserRole::Admin.as_str()).await?;
        if admins.is_empty() {
            return Err(ServiceError::NotFound("No admin users found".to_string()));
        }

        let admin_ids: Vec<i32> = admins.iter().map(|a| a.id).collect();
        Ok(NotificationRepository::find_by_users(&self.pool, &admin_ids).await?)
    }

    pub async fn mark_read(&self, notification_id: i32) -> Result<NotificationRow, ServiceError> {
        NotificationRepository::mark_read(&self.pool, notification_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Notification not found".to_string()))
    }

    pub async fn unread_count(&self, caller: i32) -> Result<i64, ServiceError> {
        Ok(NotificationRepository::count_unread(&self.pool, caller).await?)
    }

    /// Remove the caller's notifications wholesale. Zero removals is
    /// reported as "nothing to clear" rather than a silent success.
    pub async fn clear_all(&self, caller: i32) -> Result<u64, ServiceError> {
        let deleted = NotificationRepository::delete_by_user(&self.pool, caller).await?;
        if deleted == 0 {
            return Err(ServiceError::NotFound(
                "No notifications found to clear".to_string(),
            ));
        }

        info!("Service: cleared {} notifications for user {}", deleted, caller);
        Ok(deleted)
    }
}
