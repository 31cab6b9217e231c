//! Rentals repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::rental::{Rental, RentalRequest},
};

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Postgres>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all rentals
    pub async fn list(&self) -> AppResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>("SELECT * FROM rentals ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    /// Get rental by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Rental>> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    /// Insert a new rental
    pub async fn create(&self, rental: &RentalRequest) -> AppResult<Rental> {
        let created = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals (book_id, username, rental_date, return_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(rental.book_id)
        .bind(&rental.username)
        .bind(&rental.rental_date)
        .bind(&rental.return_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update all fields of an existing rental
    pub async fn update(&self, id: i64, rental: &RentalRequest) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE rentals
            SET book_id = $2, username = $3, rental_date = $4, return_date = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(rental.book_id)
        .bind(&rental.username)
        .bind(&rental.rental_date)
        .bind(&rental.return_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
