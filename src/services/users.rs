//! User management service

use std::sync::Arc;

use crate::{error::AppResult, models::user::User, repository::UsersRepository};

#[derive(Clone)]
pub struct UsersService {
    repository: Arc<dyn UsersRepository>,
}

impl UsersService {
    pub fn new(repository: Arc<dyn UsersRepository>) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list_all(&self) -> AppResult<Vec<User>> {
        self.repository.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.repository.find_by_id(id).await
    }

    /// Insert or overwrite, depending on whether `user.id` is set
    pub async fn save(&self, user: User) -> AppResult<User> {
        self.repository.save(user).await
    }

    /// Create a user; any client-supplied id is discarded
    pub async fn create(&self, user: User) -> AppResult<User> {
        let created = self.save(User { id: None, ..user }).await?;
        tracing::info!("User created: id={:?}", created.id);
        Ok(created)
    }

    /// Replace name, email and password of an existing user.
    /// Returns `None` when no user has this id.
    pub async fn update(&self, id: i64, changes: User) -> AppResult<Option<User>> {
        let Some(mut user) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        user.merge(changes);
        let updated = self.save(user).await?;
        tracing::info!("User updated: id={}", id);
        Ok(Some(updated))
    }

    /// Delete a user. Returns false when no user has this id.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        if !self.repository.exists_by_id(id).await? {
            return Ok(false);
        }
        let deleted = self.repository.delete_by_id(id).await?;
        if deleted {
            tracing::info!("User deleted: id={}", id);
        }
        Ok(deleted)
    }
}
