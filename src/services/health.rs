//! Health and readiness checks

use crate::{error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct HealthService {
    repository: Repository,
}

impl HealthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Verify that the database answers queries
    pub async fn database_ready(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
