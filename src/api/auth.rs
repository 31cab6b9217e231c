//! Authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, LoginRequest, LoginResponse, RegisterResponse, User},
    services::auth::LOGIN_FAILED,
};

use super::CurrentUser;

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Username or email already exists", body = RegisterResponse)
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = state.services.auth.register(request).await?;

    let status = if response.error.is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    Ok((status, Json(response)))
}

/// Authenticate and obtain a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token generated", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = LoginResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    match state
        .services
        .auth
        .login(&request.username, &request.password)
        .await
    {
        Ok(token) => Ok((StatusCode::OK, Json(LoginResponse::success(token)))),
        Err(AppError::Authentication(_)) => Ok((
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse::failure(LOGIN_FAILED)),
        )),
        Err(e) => Err(e),
    }
}

/// Get the authenticated user's details
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(CurrentUser(user): CurrentUser) -> AppResult<Json<User>> {
    Ok(Json(user))
}
