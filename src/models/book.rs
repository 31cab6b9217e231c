//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
}

/// Book create/update request
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
}

/// Book mutation outcome; message and error are mutually exclusive
#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl BookResponse {
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
