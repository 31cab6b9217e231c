//! JWT token issuing and validation

use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{User, UserClaims},
};

/// Issues and validates signed bearer tokens
///
/// The signing secret and expiration are loaded once from configuration and
/// never mutated afterwards.
#[derive(Clone)]
pub struct TokenService {
    jwt_secret: String,
    jwt_expiration_hours: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            jwt_expiration_hours: config.jwt_expiration_hours,
        }
    }

    /// Issue a signed token carrying the user's identity claims
    pub fn issue(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.username.clone(),
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            exp,
            iat: now,
        };

        claims
            .create_token(&self.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Validate a token and extract its subject (username)
    ///
    /// Malformed, expired, or badly signed tokens, and tokens whose subject
    /// is empty, all resolve to `None`; no identity, never a hard failure.
    pub fn parse(&self, token: &str) -> Option<String> {
        let claims = UserClaims::from_token(token, &self.jwt_secret).ok()?;
        if claims.sub.is_empty() {
            return None;
        }
        Some(claims.sub)
    }
}
