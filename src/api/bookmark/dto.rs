use serde::Serialize;

use crate::db::models::{BookmarkRow, CompanyRow, JobRow};

/// One saved job with job and company resolved; either may be gone
#[derive(Serialize)]
pub struct BookmarkedJob {
    pub bookmark: BookmarkRow,
    pub job: Option<JobRow>,
    pub company: Option<CompanyRow>,
}

#[derive(Serialize)]
pub struct BookmarksResponse {
    pub bookmarks: Vec<BookmarkedJob>,
}

#[derive(Serialize)]
pub struct ToggleResponse {
    pub message: String,
    pub bookmarked: bool,
}

#[derive(Serialize)]
pub struct CheckBookmarkResponse {
    pub is_bookmarked: bool,
}
