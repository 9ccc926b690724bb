use sqlx::{Pool, Postgres};

use crate::db::models::AdminRow;

/// Repository for back-office admin accounts
pub struct AdminRepository;

impl AdminRepository {
    pub async fn find_by_email(
        pool: &Pool<Postgres>,
        email: &str,
    ) -> Result<Option<AdminRow>, sqlx::Error> {
        sqlx::query_as::<_, AdminRow>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
