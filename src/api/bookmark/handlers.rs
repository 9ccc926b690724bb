use actix_web::{
    get, post,
    web::{scope, Data, Path, ServiceConfig},
    HttpResponse,
};

use super::dto::{BookmarksResponse, CheckBookmarkResponse, ToggleResponse};
use super::BookmarkService;
use crate::api::error::ServiceError;
use crate::auth::AuthUser;

#[post("/toggle/{job_id}")]
async fn toggle_bookmark(
    service: Data<BookmarkService>,
    caller: AuthUser,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let added = service.toggle(caller.id, path.into_inner()).await?;
    let response = if added {
        HttpResponse::Created().json(ToggleResponse {
            message: "Job added to bookmarks".to_string(),
            bookmarked: true,
        })
    } else {
        HttpResponse::Ok().json(ToggleResponse {
            message: "Job removed from bookmarks".to_string(),
            bookmarked: false,
        })
    };
    Ok(response)
}

#[get("")]
async fn get_bookmarks(
    service: Data<BookmarkService>,
    caller: AuthUser,
) -> Result<HttpResponse, ServiceError> {
    let bookmarks = service.list(caller.id).await?;
    Ok(HttpResponse::Ok().json(BookmarksResponse { bookmarks }))
}

#[get("/check/{job_id}")]
async fn check_bookmark(
    service: Data<BookmarkService>,
    caller: AuthUser,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let is_bookmarked = service.is_bookmarked(caller.id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CheckBookmarkResponse { is_bookmarked }))
}

pub fn bookmark_config(config: &mut ServiceConfig) {
    config.service(
        scope("/api/v1/bookmark")
            .service(toggle_bookmark)
            .service(get_bookmarks)
            .service(check_bookmark),
    );
}
