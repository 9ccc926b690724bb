use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::api::notification::models::{NotificationTarget, NotificationType};
use crate::db::models::NotificationRow;

/// Repository for Notification database operations
pub struct NotificationRepository;

impl NotificationRepository {
    /// Insert a single notification addressed to one recipient
    pub async fn create(
        pool: &Pool<Postgres>,
        kind: NotificationType,
        message: &str,
        target: NotificationTarget,
        user_id: i32,
    ) -> Result<NotificationRow, sqlx::Error> {
        debug!(
            "Creating notification: type={}, target={}({}), user_id={}",
            kind.as_str(),
            target.model(),
            target.id(),
            user_id
        );

        sqlx::query_as::<_, NotificationRow>(
            r#"
            INSERT INTO notifications (type, message, target_model, target_id, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(kind.as_str())
        .bind(message)
        .bind(target.model())
        .bind(target.id())
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Notifications addressed to one user, newest first
    pub async fn find_by_user(
        pool: &Pool<Postgres>,
        user_id: i32,
    ) -> Result<Vec<NotificationRow>, sqlx::Error> {
        sqlx::query_as::<_, NotificationRow>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Notifications addressed to any of the given users, newest first
    pub async fn find_by_users(
        pool: &Pool<Postgres>,
        user_ids: &[i32],
    ) -> Result<Vec<NotificationRow>, sqlx::Error> {
        sqlx::query_as::<_, NotificationRow>(
            "SELECT * FROM notifications WHERE user_id = ANY($1) ORDER BY created_at DESC",
        )
        .bind(user_ids)
        .fetch_all(pool)
        .await
    }

    /// Flip is_read on a single notification; None when the id is unknown
    pub async fn mark_read(
        pool: &Pool<Postgres>,
        id: i32,
    ) -> Result<Option<NotificationRow>, sqlx::Error> {
        sqlx::query_as::<_, NotificationRow>(
            "UPDATE notifications SET is_read = TRUE, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn count_unread(pool: &Pool<Postgres>, user_id: i32) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Remove every notification addressed to the user, returning the count
    pub async fn delete_by_user(pool: &Pool<Postgres>, user_id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
