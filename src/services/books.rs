//! Book management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookRequest, BookResponse},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book not found with id: {}", id)))
    }

    /// Add a new book
    pub async fn add_book(&self, request: BookRequest) -> AppResult<BookResponse> {
        let book = self.repository.books.create(&request).await?;

        if book.id <= 0 {
            return Ok(BookResponse::error("Failed to add book"));
        }

        Ok(BookResponse::ok("Book Added Successfully"))
    }

    /// Update an existing book
    pub async fn update_book(&self, id: i64, request: BookRequest) -> AppResult<BookResponse> {
        if self.repository.books.get_by_id(id).await?.is_none() {
            return Ok(BookResponse::error("Book not found"));
        }

        self.repository.books.update(id, &request).await?;
        Ok(BookResponse::ok("Book Updated Successfully"))
    }

    /// Update only the status of an existing book
    pub async fn update_book_status(&self, id: i64, request: BookRequest) -> AppResult<BookResponse> {
        if self.repository.books.get_by_id(id).await?.is_none() {
            return Ok(BookResponse::error("Book not found"));
        }

        self.repository.books.update_status(id, &request.status).await?;
        Ok(BookResponse::ok("Book Status Updated Successfully"))
    }

    /// Delete a book
    pub async fn delete_book(&self, id: i64) -> AppResult<BookResponse> {
        if self.repository.books.get_by_id(id).await?.is_none() {
            return Ok(BookResponse::error("Book not found"));
        }

        self.repository.books.delete(id).await?;
        Ok(BookResponse::ok("Book Deleted Successfully"))
    }
}
