pub mod admin_repository;
pub mod application_repository;
pub mod bookmark_repository;
pub mod company_repository;
pub mod connection;
pub mod job_repository;
pub mod migrations;
pub mod models;
pub mod notification_repository;
pub mod user_repository;
