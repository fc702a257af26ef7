use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("users not found")]
    UsersNotLoaded,
    #[error("No user found with that name")]
    UserNotFound,
    #[error("{0}")]
    InvalidUser(String),
    #[error("Error saving user")]
    SaveFailed,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    message: String,
    status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // The only error answered with a JSON envelope; the rest are plain text.
            ApiError::UsersNotLoaded => {
                let status = StatusCode::NOT_FOUND;
                let body = ErrorBody {
                    error: ErrorDetail {
                        message: self.to_string(),
                        status: status.as_u16(),
                    },
                };
                (status, Json(body)).into_response()
            }
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            ApiError::InvalidUser(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::SaveFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}
