//! Book management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookRequest, BookResponse},
};

fn mutation_status(response: &BookResponse) -> StatusCode {
    if response.error.is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    }
}

/// List all books
#[utoipa::path(
    get,
    path = "/books/all",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books/add",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book added", body = BookResponse),
        (status = 400, description = "Failed to add book", body = BookResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(request): Json<BookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let response = state.services.books.add_book(request).await?;
    Ok((mutation_status(&response), Json(response)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Book not found", body = BookResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(request): Json<BookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let response = state.services.books.update_book(id, request).await?;
    Ok((mutation_status(&response), Json(response)))
}

/// Update only the status of an existing book
#[utoipa::path(
    put,
    path = "/books/{id}/status",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book status updated", body = BookResponse),
        (status = 400, description = "Book not found", body = BookResponse)
    )
)]
pub async fn update_book_status(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(request): Json<BookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let response = state.services.books.update_book_status(id, request).await?;
    Ok((mutation_status(&response), Json(response)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = BookResponse),
        (status = 400, description = "Book not found", body = BookResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let response = state.services.books.delete_book(id).await?;
    Ok((mutation_status(&response), Json(response)))
}
