use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::middleware::issue_token;
use crate::application::dto::{LoginRequest, LoginResponse, RegisterRequest, UserDto};
use crate::application::use_cases::{LoginUserUseCase, RegisterUserUseCase};

/// POST /auth/register
pub async fn register_handler(
    State(use_case): State<Arc<RegisterUserUseCase>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let user = use_case.execute(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /auth/login
pub async fn login_handler(
    State(use_case): State<Arc<LoginUserUseCase>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = use_case.execute(&request.username, &request.password).await?;

    let token = issue_token(user.id(), user.username())
        .map_err(|_| ApiError::internal_error("Failed to issue token"))?;

    Ok(Json(LoginResponse {
        token,
        user: UserDto::from(user),
    }))
}
