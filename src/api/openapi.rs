//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, health, rentals, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BookHive API",
        version = "1.0.0",
        description = "Library Management Backend REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Books
        books::list_books,
        books::get_book,
        books::add_book,
        books::update_book,
        books::update_book_status,
        books::delete_book,
        // Rentals
        rentals::list_rentals,
        rentals::get_rental,
        rentals::add_rental,
        rentals::update_rental,
        // Users
        users::list_users,
        users::create_user,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::CreateUser,
            crate::models::user::LoginRequest,
            crate::models::user::LoginResponse,
            crate::models::user::RegisterResponse,
            // Books
            crate::models::book::Book,
            crate::models::book::BookRequest,
            crate::models::book::BookResponse,
            // Rentals
            crate::models::rental::Rental,
            crate::models::rental::RentalRequest,
            crate::models::rental::RentalResponse,
            // Users
            crate::models::user::User,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "books", description = "Book management"),
        (name = "rentals", description = "Rental management"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
