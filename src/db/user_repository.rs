use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::api::user::models::NewUser;
use crate::db::models::UserRow;

/// Repository for User database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user and return the full record
    pub async fn create(pool: &Pool<Postgres>, user: &NewUser) -> Result<UserRow, sqlx::Error> {
        debug!("Creating user: email={}, role={}", user.email, user.role);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (fullname, email, phone_number, password, role, profile_photo)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&user.fullname)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.password)
        .bind(&user.role)
        .bind(&user.profile_photo)
        .fetch_one(pool)
        .await?;

        debug!("User created with id={}", row.id);
        Ok(row)
    }

    pub async fn find_by_email(
        pool: &Pool<Postgres>,
        email: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &Pool<Postgres>,
        id: i32,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_ids(
        pool: &Pool<Postgres>,
        ids: &[i32],
    ) -> Result<Vec<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// All users holding the given role (used for admin notification fan-out)
    pub async fn find_by_role(
        pool: &Pool<Postgres>,
        role: &str,
    ) -> Result<Vec<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE role = $1")
            .bind(role)
            .fetch_all(pool)
            .await
    }

    pub async fn find_all(pool: &Pool<Postgres>) -> Result<Vec<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    /// Write back the mutable profile fields of an already-loaded user
    pub async fn update(pool: &Pool<Postgres>, user: &UserRow) -> Result<UserRow, sqlx::Error> {
        debug!("Updating user id={}", user.id);

        sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET fullname = $1,
                email = $2,
                phone_number = $3,
                bio = $4,
                skills = $5,
                resume = $6,
                resume_original_name = $7,
                profile_photo = $8,
                updated_at = now()
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&user.fullname)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.bio)
        .bind(&user.skills)
        .bind(&user.resume)
        .bind(&user.resume_original_name)
        .bind(&user.profile_photo)
        .bind(user.id)
        .fetch_one(pool)
        .await
    }

    /// Delete a user by id, returning the number of rows removed
    pub async fn delete(pool: &Pool<Postgres>, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
