use actix_web::{
    get, post,
    web::{scope, Data, Path, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;

use super::dto::{ApplicationResponse, AppliedJobsResponse, UpdateStatusRequest};
use super::ApplicationService;
use crate::api::error::ServiceError;
use crate::auth::AuthUser;

#[post("/apply/{id}")]
async fn apply(
    service: Data<ApplicationService>,
    caller: AuthUser,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let application = service.apply(caller.id, path.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApplicationResponse {
        message: "Applied successfully".to_string(),
        application,
    }))
}

#[get("/get")]
async fn applied_jobs(
    service: Data<ApplicationService>,
    caller: AuthUser,
) -> Result<HttpResponse, ServiceError> {
    let applications = service.applied(caller.id).await?;
    Ok(HttpResponse::Ok().json(AppliedJobsResponse { applications }))
}

#[get("/{id}/applicants")]
async fn applicants(
    service: Data<ApplicationService>,
    _caller: AuthUser,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let view = service.applicants(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/status/{id}/update")]
async fn update_status(
    service: Data<ApplicationService>,
    _caller: AuthUser,
    path: Path<i32>,
    body: Json<UpdateStatusRequest>,
) -> Result<HttpResponse, ServiceError> {
    let application = service.update_status(path.into_inner(), &body.status).await?;
    Ok(HttpResponse::Ok().json(ApplicationResponse {
        message: "Status updated successfully".to_string(),
        application,
    }))
}

pub fn application_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api/v1/application")
            .service(apply)
            .service(applied_jobs)
            .service(applicants)
            .service(update_status),
    );
}
