use serde::{Deserialize, Serialize};
use validator::Validate;

use super::models::NotificationType;
use crate::db::models::NotificationRow;

/// Payload of the internal create endpoint
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[serde(rename = "type")]
    pub kind: NotificationType,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    #[validate(length(min = 1, message = "Target model is required"))]
    pub target_model: String,

    pub target_id: i32,

    pub user_id: i32,
}

#[derive(Serialize)]
pub struct NotificationResponse {
    pub message: String,
    pub notification: NotificationRow,
}

#[derive(Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<NotificationRow>,
}

#[derive(Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}
