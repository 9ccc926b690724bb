use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};

use crate::api::error::ServiceError;
use crate::config::Config;

/// Name of the cookie carrying the signed token
pub const TOKEN_COOKIE: &str = "token";

/// Token lifetime: one day, mirrored by the cookie's max-age
const TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Who a token speaks for. Site users and back-office admins live in
/// different tables and never share an id space, so the claim is tagged
/// rather than a bare id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
    User { id: i32 },
    Admin { id: i32 },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub principal: Principal,
    pub exp: i64,
}

/// Sign a token for the given principal, valid for one day
pub fn issue_token(principal: Principal, secret: &str) -> Result<String, ServiceError> {
    let exp = (Utc::now() + Duration::seconds(TOKEN_TTL_SECONDS)).timestamp();
    sign(Claims { principal, exp }, secret)
}

fn sign(claims: Claims, secret: &str) -> Result<String, ServiceError> {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ServiceError::Internal(format!("Failed to sign token: {}", e)))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Build the HttpOnly auth cookie carrying a freshly signed token
pub fn auth_cookie(token: String) -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(CookieDuration::seconds(TOKEN_TTL_SECONDS))
        .finish()
}

/// Expired replacement cookie used by logout
pub fn clear_auth_cookie() -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(CookieDuration::ZERO)
        .finish()
}

pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::Internal(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Authenticated site user, extracted from the token cookie.
/// Handlers thread `id` into every service call; identity is never
/// read from ambient state further down.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: i32,
}

/// Authenticated back-office admin, extracted from the token cookie
#[derive(Debug, Clone, Copy)]
pub struct AuthAdmin {
    pub id: i32,
}

fn authenticate(req: &HttpRequest) -> Result<Principal, ServiceError> {
    let config = req
        .app_data::<web::Data<Config>>()
        .ok_or_else(|| ServiceError::Internal("configuration not attached to app".to_string()))?;

    let cookie = req
        .cookie(TOKEN_COOKIE)
        .ok_or_else(|| ServiceError::Unauthorized("Authentication required".to_string()))?;

    let claims = decode_token(cookie.value(), &config.jwt_secret)
        .map_err(|_| ServiceError::Unauthorized("Invalid or expired token".to_string()))?;

    Ok(claims.principal)
}

impl FromRequest for AuthUser {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).and_then(|principal| match principal {
            Principal::User { id } => Ok(AuthUser { id }),
            Principal::Admin { .. } => Err(ServiceError::Unauthorized(
                "This action requires a user account".to_string(),
            )),
        }))
    }
}

impl FromRequest for AuthAdmin {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).and_then(|principal| match principal {
            Principal::Admin { id } => Ok(AuthAdmin { id }),
            Principal::User { .. } => Err(ServiceError::Unauthorized(
                "This action requires an admin account".to_string(),
            )),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_round_trips_user_principal() {
        let token = issue_token(Principal::User { id: 42 }, SECRET).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.principal, Principal::User { id: 42 });
    }

    #[test]
    fn token_round_trips_admin_principal() {
        let token = issue_token(Principal::Admin { id: 7 }, SECRET).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.principal, Principal::Admin { id: 7 });
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = Claims {
            principal: Principal::User { id: 1 },
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
        };
        let token = sign(claims, SECRET).unwrap();
        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issue_token(Principal::User { id: 1 }, "other-secret").unwrap();
        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn auth_cookie_is_locked_down() {
        let cookie = auth_cookie("abc".to_string());
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(
            cookie.max_age(),
            Some(CookieDuration::seconds(TOKEN_TTL_SECONDS))
        );
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_auth_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(CookieDuration::ZERO));
    }

    #[test]
    fn password_hash_verifies_original_only() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
        assert!(!verify_password("hunter2", "not-a-phc-string"));
    }

    fn test_config() -> Config {
        Config {
            database_url: "postgresql://localhost/test".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            jwt_secret: SECRET.to_string(),
            frontend_url: None,
            max_payload_size: 1024,
            max_db_connections: 1,
            log_dir: "logs".to_string(),
        }
    }

    #[actix_web::test]
    async fn user_extractor_accepts_a_user_token() {
        let token = issue_token(Principal::User { id: 42 }, SECRET).unwrap();
        let req = actix_web::test::TestRequest::default()
            .app_data(web::Data::new(test_config()))
            .cookie(auth_cookie(token))
            .to_http_request();

        let user = AuthUser::from_request(&req, &mut Payload::None).await.unwrap();
        assert_eq!(user.id, 42);
    }

    #[actix_web::test]
    async fn user_extractor_rejects_admin_tokens_and_missing_cookies() {
        let token = issue_token(Principal::Admin { id: 7 }, SECRET).unwrap();
        let req = actix_web::test::TestRequest::default()
            .app_data(web::Data::new(test_config()))
            .cookie(auth_cookie(token))
            .to_http_request();
        assert!(AuthUser::from_request(&req, &mut Payload::None).await.is_err());

        let bare = actix_web::test::TestRequest::default()
            .app_data(web::Data::new(test_config()))
            .to_http_request();
        assert!(AuthUser::from_request(&bare, &mut Payload::None).await.is_err());
        assert!(AuthAdmin::from_request(&bare, &mut Payload::None).await.is_err());
    }

    #[actix_web::test]
    async fn admin_extractor_accepts_an_admin_token() {
        let token = issue_token(Principal::Admin { id: 7 }, SECRET).unwrap();
        let req = actix_web::test::TestRequest::default()
            .app_data(web::Data::new(test_config()))
            .cookie(auth_cookie(token))
            .to_http_request();

        let admin = AuthAdmin::from_request(&req, &mut Payload::None).await.unwrap();
        assert_eq!(admin.id, 7);
    }
}
