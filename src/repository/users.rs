//! Users repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::User,
};

/// Data access for users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// All users, ordered by id
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Insert when `user.id` is unset, otherwise overwrite the matching row.
    async fn save(&self, user: User) -> AppResult<User>;

    /// Returns true if a row was deleted.
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct PgUsersRepository {
    pool: Pool<Postgres>,
}

impl PgUsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        match user.id {
            None => {
                let created = sqlx::query_as::<_, User>(
                    r#"
                    INSERT INTO users (name, email, password)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, email, password
                    "#,
                )
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.password)
                .fetch_one(&self.pool)
                .await?;
                Ok(created)
            }
            Some(id) => sqlx::query_as::<_, User>(
                r#"
                UPDATE users SET name = $2, email = $3, password = $4
                WHERE id = $1
                RETURNING id, name, email, password
                "#,
            )
            .bind(id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id))),
        }
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
