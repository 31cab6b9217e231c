//! Authentication service: registration, login, token resolution

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, RegisterResponse, User},
    repository::Repository,
    services::{password, tokens::TokenService},
};

/// Uniform failure message for login; the same value covers unknown user and
/// wrong password so the response does not reveal which check failed.
pub const LOGIN_FAILED: &str = "Invalid username or password";

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(repository: Repository, tokens: TokenService) -> Self {
        Self { repository, tokens }
    }

    /// Register a new user
    ///
    /// Checks run in order and short-circuit: username conflict is reported
    /// before email conflict even when both would fail.
    pub async fn register(&self, request: CreateUser) -> AppResult<RegisterResponse> {
        if self
            .repository
            .users
            .get_by_username(&request.username)
            .await?
            .is_some()
        {
            return Ok(RegisterResponse::error("Username already exists"));
        }

        if self.repository.users.email_exists(&request.email).await? {
            return Ok(RegisterResponse::error("Email already exists"));
        }

        let password_hash = password::hash(&request.password)?;

        // The check-then-insert sequence above is not atomic; a concurrent
        // registration can still trip the unique constraints here.
        let user = match self.repository.users.create(&request, &password_hash).await {
            Ok(user) => user,
            Err(AppError::Conflict(message)) => return Ok(RegisterResponse::error(message)),
            Err(e) => return Err(e),
        };

        if user.id <= 0 {
            return Ok(RegisterResponse::error("Error creating user"));
        }

        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        Ok(RegisterResponse::ok(format!("User registered at {}", user.id)))
    }

    /// Authenticate by username/password and issue a JWT token
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let user = self
            .repository
            .users
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::Authentication(LOGIN_FAILED.to_string()))?;

        if !password::verify(password, &user.password) {
            return Err(AppError::Authentication(LOGIN_FAILED.to_string()));
        }

        self.tokens.issue(&user)
    }

    /// Resolve the user a token was issued for
    ///
    /// Invalid tokens and tokens whose subject no longer exists in the store
    /// (stale tokens for removed accounts) both resolve to `None`.
    pub async fn resolve_from_token(&self, token: &str) -> AppResult<Option<User>> {
        let Some(subject) = self.tokens.parse(token) else {
            return Ok(None);
        };

        self.repository.users.get_by_username(&subject).await
    }
}
