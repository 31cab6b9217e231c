//! Rental model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Rental record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rental {
    pub id: i64,
    pub book_id: i64,
    pub username: String,
    pub rental_date: Option<String>,
    pub return_date: Option<String>,
}

/// Rental create/update request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RentalRequest {
    pub book_id: i64,
    pub username: String,
    pub rental_date: Option<String>,
    pub return_date: Option<String>,
}

/// Rental mutation outcome; message and error are mutually exclusive
#[derive(Debug, Serialize, ToSchema)]
pub struct RentalResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl RentalResponse {
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
