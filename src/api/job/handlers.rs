use actix_web::{
    delete, get, post, put,
    web::{scope, Data, Path, Query, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;
use serde::Deserialize;

use super::dto::{JobDetailResponse, JobResponse, JobsResponse, PostJobRequest, UpdateJobRequest};
use super::JobService;
use crate::api::error::ServiceError;
use crate::api::validation::MessageResponse;
use crate::auth::AuthUser;

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    keyword: String,
}

#[post("/post")]
async fn post_job(
    service: Data<JobService>,
    caller: AuthUser,
    body: Json<PostJobRequest>,
) -> Result<HttpResponse, ServiceError> {
    let job = service.post(caller.id, &body).await?;
    Ok(HttpResponse::Created().json(JobResponse {
        message: "New job created successfully".to_string(),
        job,
    }))
}

/// Public listing; guests browse without a token
#[get("/get")]
async fn get_jobs(
    service: Data<JobService>,
    query: Query<SearchQuery>,
) -> Result<HttpResponse, ServiceError> {
    let jobs = service.all(&query.keyword).await?;
    Ok(HttpResponse::Ok().json(JobsResponse { jobs }))
}

#[get("/get/{id}")]
async fn get_job_by_id(
    service: Data<JobService>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let job = service.by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(JobDetailResponse { job }))
}

#[get("/my")]
async fn my_jobs(
    service: Data<JobService>,
    caller: AuthUser,
) -> Result<HttpResponse, ServiceError> {
    let jobs = service.mine(caller.id).await?;
    Ok(HttpResponse::Ok().json(JobsResponse { jobs }))
}

#[put("/update/{id}")]
async fn update_job(
    service: Data<JobService>,
    caller: AuthUser,
    path: Path<i32>,
    body: Json<UpdateJobRequest>,
) -> Result<HttpResponse, ServiceError> {
    let job = service.update(caller.id, path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(JobResponse {
        message: "Job updated successfully".to_string(),
        job,
    }))
}

#[delete("/delete/{id}")]
async fn delete_job(
    service: Data<JobService>,
    caller: AuthUser,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    service.delete(caller.id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Job deleted successfully")))
}

pub fn job_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api/v1/job")
            .service(post_job)
            .service(get_jobs)
            .service(get_job_by_id)
            .service(my_jobs)
            .service(update_job)
            .service(delete_job),
    );
}
