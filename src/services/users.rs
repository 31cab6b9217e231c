//! User management service

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User},
    repository::Repository,
    services::password,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Create a new user, enforcing the same uniqueness rules as registration
    pub async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        if self
            .repository
            .users
            .get_by_username(&user.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        if self.repository.users.email_exists(&user.email).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let password_hash = password::hash(&user.password)?;

        self.repository.users.create(&user, &password_hash).await
    }
}
