use actix_web::{
    delete, get, post, put,
    web::{scope, Data, Path, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;

use super::dto::{
    CreateNotificationRequest, NotificationResponse, NotificationsResponse, UnreadCountResponse,
};
use super::NotificationService;
use crate::api::error::ServiceError;
use crate::api::validation::MessageResponse;
use crate::auth::AuthUser;

#[post("/create")]
async fn create_notification(
    service: Data<NotificationService>,
    _caller: AuthUser,
    body: Json<CreateNotificationRequest>,
) -> Result<HttpResponse, ServiceError> {
    let notification = service.create(&body).await?;
    Ok(HttpResponse::Created().json(NotificationResponse {
        message: "Notification created successfully".to_string(),
        notification,
    }))
}

#[get("/user")]
async fn user_notifications(
    service: Data<NotificationService>,
    caller: AuthUser,
) -> Result<HttpResponse, ServiceError> {
    let notifications = service.for_user(caller.id).await?;
    Ok(HttpResponse::Ok().json(NotificationsResponse { notifications }))
}

#[get("/admin")]
async fn admin_notifications(
    service: Data<NotificationService>,
    caller: AuthUser,
) -> Result<HttpResponse, ServiceError> {
    let notifications = service.for_admins(caller.id).await?;
    Ok(HttpResponse::Ok().json(NotificationsResponse { notifications }))
}

#[put("/read/{notification_id}")]
async fn mark_notification_read(
    service: Data<NotificationService>,
    _caller: AuthUser,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let notification = service.mark_read(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(NotificationResponse {
        message: "Notification marked as read".to_string(),
        notification,
    }))
}

#[get("/unread/count")]
async fn unread_count(
    service: Data<NotificationService>,
    caller: AuthUser,
) -> Result<HttpResponse, ServiceError> {
    let count = service.unread_count(caller.id).await?;
    Ok(HttpResponse::Ok().json(UnreadCountResponse { count }))
}

#[delete("/clear-all")]
async fn clear_all_notifications(
    service: Data<NotificationService>,
    caller: AuthUser,
) -> Result<HttpResponse, ServiceError> {
    let deleted = service.clear_all(caller.id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "{} notifications cleared successfully",
        deleted
    ))))
}

pub fn notification_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api/v1/notification")
            .service(create_notification)
            .service(user_notifications)
            .service(admin_notifications)
            .service(mark_notification_read)
            .service(unread_count)
            .service(clear_all_notifications),
    );
}
