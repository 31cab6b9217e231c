//! Rental management service

use crate::{
    error::{AppError, AppResult},
    models::rental::{Rental, RentalRequest, RentalResponse},
    repository::Repository,
};

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
}

impl RentalsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get all rentals
    pub async fn list(&self) -> AppResult<Vec<Rental>> {
        self.repository.rentals.list().await
    }

    /// Get rental by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Rental> {
        self.repository
            .rentals
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rental not found with id: {}", id)))
    }

    /// Add a new rental
    pub async fn add_rental(&self, request: RentalRequest) -> AppResult<RentalResponse> {
        let rental = self.repository.rentals.create(&request).await?;

        if rental.id <= 0 {
            return Ok(RentalResponse::error("Failed to add rental"));
        }

        Ok(RentalResponse::ok("Rental Added Successfully"))
    }

    /// Update an existing rental
    pub async fn update_rental(&self, id: i64, request: RentalRequest) -> AppResult<RentalResponse> {
        if self.repository.rentals.get_by_id(id).await?.is_none() {
            return Ok(RentalResponse::error("Rental not found"));
        }

        self.repository.rentals.update(id, &request).await?;
        Ok(RentalResponse::ok("Rental Updated Successfully"))
    }
}
