use actix_web::{
    delete, get, post, put,
    web::{scope, Data, Path, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;

use super::dto::{
    CompaniesResponse, CompanyResponse, RegisterCompanyRequest, UpdateCompanyRequest,
    VerifyCompanyRequest,
};
use super::CompanyService;
use crate::api::error::ServiceError;
use crate::api::validation::MessageResponse;
use crate::auth::{AuthAdmin, AuthUser};

#[post("/register")]
async fn register_company(
    service: Data<CompanyService>,
    caller: AuthUser,
    body: Json<RegisterCompanyRequest>,
) -> Result<HttpResponse, ServiceError> {
    let company = service.register(caller.id, &body).await?;
    Ok(HttpResponse::Created().json(CompanyResponse {
        message: "Company registered successfully and pending admin verification".to_string(),
        company,
    }))
}

#[get("/get")]
async fn get_companies(
    service: Data<CompanyService>,
    caller: AuthUser,
) -> Result<HttpResponse, ServiceError> {
    let companies = service.my_companies(caller.id).await?;
    Ok(HttpResponse::Ok().json(CompaniesResponse { companies }))
}

#[get("/get/{id}")]
async fn get_company_by_id(
    service: Data<CompanyService>,
    _caller: AuthUser,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let company = service.by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CompanyResponse {
        message: "Company found".to_string(),
        company,
    }))
}

#[put("/update/{id}")]
async fn update_company(
    service: Data<CompanyService>,
    caller: AuthUser,
    path: Path<i32>,
    body: Json<UpdateCompanyRequest>,
) -> Result<HttpResponse, ServiceError> {
    let company = service.update(caller.id, path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(CompanyResponse {
        message: "Company info updated".to_string(),
        company,
    }))
}

#[get("/verification-status/{id}")]
async fn verification_status(
    service: Data<CompanyService>,
    caller: AuthUser,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let status = service.verification_status(caller.id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(status))
}

#[get("/admin/all")]
async fn all_companies(
    service: Data<CompanyService>,
    _caller: AuthAdmin,
) -> Result<HttpResponse, ServiceError> {
    let companies = service.all().await?;
    Ok(HttpResponse::Ok().json(CompaniesResponse { companies }))
}

#[get("/admin/pending")]
async fn pending_companies(
    service: Data<CompanyService>,
    _caller: AuthAdmin,
) -> Result<HttpResponse, ServiceError> {
    let companies = service.pending().await?;
    Ok(HttpResponse::Ok().json(CompaniesResponse { companies }))
}

#[post("/admin/verify/{company_id}")]
async fn verify_company(
    service: Data<CompanyService>,
    caller: AuthAdmin,
    path: Path<i32>,
    body: Json<VerifyCompanyRequest>,
) -> Result<HttpResponse, ServiceError> {
    let (message, company) = service
        .verify(caller.id, path.into_inner(), &body.verification_status)
        .await?;
    Ok(HttpResponse::Ok().json(CompanyResponse { message, company }))
}

#[delete("/admin/delete/{company_id}")]
async fn delete_company(
    service: Data<CompanyService>,
    caller: AuthAdmin,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    service.delete(caller.id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Company deleted successfully")))
}

pub fn company_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api/v1/company")
            .service(register_company)
            .service(get_companies)
            .service(get_company_by_id)
            .service(update_company)
            .service(verification_status)
            .service(all_companies)
            .service(pending_companies)
            .service(verify_company)
            .service(delete_company),
    );
}
