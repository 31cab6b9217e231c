//! User model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User identity record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Display name
    pub name: Option<String>,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Create user / registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
    pub name: Option<String>,
}

/// Registration outcome; message and error are mutually exclusive
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl RegisterResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login outcome; token and error_message are mutually exclusive
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub error_message: Option<String>,
    pub status_message: String,
}

impl LoginResponse {
    pub fn success(token: String) -> Self {
        Self {
            token: Some(token),
            timestamp: Utc::now(),
            error_message: None,
            status_message: "Token generated successfully".to_string(),
        }
    }

    pub fn failure(error_message: impl Into<String>) -> Self {
        Self {
            token: None,
            timestamp: Utc::now(),
            error_message: Some(error_message.into()),
            status_message: "Token not generated".to_string(),
        }
    }
}

/// JWT claims for authenticated users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub id: i64,
    pub username: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}
