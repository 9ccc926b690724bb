use actix_web::{
    delete, get, post,
    web::{scope, Data, Path, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;

use super::dto::{
    AdminJobsResponse, AdminLoginRequest, AdminLoginResponse, AdminUpdateUserRequest,
    UsersResponse,
};
use super::AdminService;
use crate::api::error::ServiceError;
use crate::api::user::dto::UserResponse;
use crate::api::validation::MessageResponse;
use crate::auth::{auth_cookie, clear_auth_cookie, issue_token, AuthAdmin, Principal};
use crate::config::Config;

#[post("/login")]
async fn login(
    service: Data<AdminService>,
    config: Data<Config>,
    body: Json<AdminLoginRequest>,
) -> Result<HttpResponse, ServiceError> {
    let admin = service.login(&body).await?;
    let token = issue_token(Principal::Admin { id: admin.id }, &config.jwt_secret)?;

    Ok(HttpResponse::Ok()
        .cookie(auth_cookie(token))
        .json(AdminLoginResponse {
            message: format!("Welcome back, {}", admin.email),
        }))
}

#[get("/logout")]
async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(clear_auth_cookie())
        .json(MessageResponse::new("Admin logout successfully"))
}

#[get("/users")]
async fn get_users(
    service: Data<AdminService>,
    _caller: AuthAdmin,
) -> Result<HttpResponse, ServiceError> {
    let users = service.users().await?;
    Ok(HttpResponse::Ok().json(UsersResponse { users }))
}

#[post("/users/{id}/update")]
async fn update_user(
    service: Data<AdminService>,
    _caller: AuthAdmin,
    path: Path<i32>,
    body: Json<AdminUpdateUserRequest>,
) -> Result<HttpResponse, ServiceError> {
    let user = service.update_user(path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(UserResponse {
        message: "User profile updated successfully".to_string(),
        user,
    }))
}

#[delete("/users/{id}")]
async fn delete_user(
    service: Data<AdminService>,
    caller: AuthAdmin,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    service.delete_user(caller.id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")))
}

#[get("/jobs")]
async fn get_jobs(
    service: Data<AdminService>,
    _caller: AuthAdmin,
) -> Result<HttpResponse, ServiceError> {
    let jobs = service.jobs().await?;
    Ok(HttpResponse::Ok().json(AdminJobsResponse { jobs }))
}

#[delete("/jobs/{id}")]
async fn delete_job(
    service: Data<AdminService>,
    caller: AuthAdmin,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    service.delete_job(caller.id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Job deleted successfully")))
}

pub fn admin_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api/v1/admin")
            .service(login)
            .service(logout)
            .service(get_users)
            .service(update_user)
            .service(delete_user)
            .service(get_jobs)
            .service(delete_job),
    );
}
