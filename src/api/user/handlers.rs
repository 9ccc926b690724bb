use actix_web::{
    get, post,
    web::{scope, Data, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;

use super::dto::{LoginRequest, RegisterRequest, UpdateProfileRequest, UserResponse};
use super::UserService;
use crate::api::error::ServiceError;
use crate::api::validation::MessageResponse;
use crate::auth::{auth_cookie, clear_auth_cookie, issue_token, AuthUser, Principal};
use crate::config::Config;

#[post("/register")]
async fn register(
    service: Data<UserService>,
    body: Json<RegisterRequest>,
) -> Result<HttpResponse, ServiceError> {
    service.register(&body).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("User created successfully")))
}

#[post("/login")]
async fn login(
    service: Data<UserService>,
    config: Data<Config>,
    body: Json<LoginRequest>,
) -> Result<HttpResponse, ServiceError> {
    let user = service.login(&body).await?;
    let token = issue_token(Principal::User { id: user.id }, &config.jwt_secret)?;

    let message = format!("Welcome back {}", user.fullname);
    Ok(HttpResponse::Ok()
        .cookie(auth_cookie(token))
        .json(UserResponse { message, user }))
}

#[get("/logout")]
async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(clear_auth_cookie())
        .json(MessageResponse::new("User logout successfully"))
}

#[post("/profile/update")]
async fn update_profile(
    service: Data<UserService>,
    caller: AuthUser,
    body: Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ServiceError> {
    let user = service.update_profile(caller.id, &body).await?;
    Ok(HttpResponse::Ok().json(UserResponse {
        message: "Profile updated successfully".to_string(),
        user,
    }))
}

pub fn user_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api/v1/user")
            .service(register)
            .service(login)
            .service(logout)
            .service(update_profile),
    );
}
