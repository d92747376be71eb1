use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::use_cases::{
    CreatePostError, DeletePostError, ListError, LoginError, RegisterError, UpdatePostError,
};

/// API error response
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

// Convert use case errors to API errors

impl From<RegisterError> for ApiError {
    fn from(err: RegisterError) -> Self {
        match err {
            RegisterError::MissingFields
            | RegisterError::PasswordMismatch
            | RegisterError::Domain(_) => ApiError::bad_request(err.to_string()),
            RegisterError::AlreadyTaken => ApiError::new(StatusCode::CONFLICT, err.to_string()),
            RegisterError::Repository(e) => {
                ApiError::internal_error(format!("Repository error: {}", e))
            }
            RegisterError::Password(_) => ApiError::internal_error("Registration failed"),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidCredentials => ApiError::unauthorized(err.to_string()),
            LoginError::Repository(e) => {
                ApiError::internal_error(format!("Repository error: {}", e))
            }
        }
    }
}

impl From<CreatePostError> for ApiError {
    fn from(err: CreatePostError) -> Self {
        match err {
            CreatePostError::Domain(e) => ApiError::bad_request(e.to_string()),
            CreatePostError::Repository(e) => {
                ApiError::internal_error(format!("Repository error: {}", e))
            }
            // Generic message: the client learns nothing about the store
            CreatePostError::Image(_) => ApiError::internal_error("Image upload failed"),
        }
    }
}

impl From<UpdatePostError> for ApiError {
    fn from(err: UpdatePostError) -> Self {
        match err {
            UpdatePostError::NotFound(msg) => ApiError::not_found(msg),
            UpdatePostError::Forbidden => ApiError::forbidden(err.to_string()),
            UpdatePostError::Domain(e) => ApiError::bad_request(e.to_string()),
            UpdatePostError::Repository(e) => {
                ApiError::internal_error(format!("Repository error: {}", e))
            }
            UpdatePostError::Image(_) => ApiError::internal_error("Image upload failed"),
        }
    }
}

impl From<DeletePostError> for ApiError {
    fn from(err: DeletePostError) -> Self {
        match err {
            DeletePostError::NotFound(msg) => ApiError::not_found(msg),
            DeletePostError::Forbidden => ApiError::forbidden(err.to_string()),
            DeletePostError::Repository(e) => {
                ApiError::internal_error(format!("Repository error: {}", e))
            }
        }
    }
}

impl From<ListError> for ApiError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::NotFound(msg) => ApiError::not_found(msg),
            ListError::Repository(e) => {
                ApiError::internal_error(format!("Repository error: {}", e))
            }
        }
    }
}
