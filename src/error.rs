use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{message}: {detail}")]
    NotFound { message: String, detail: String },

    #[error("{message}: {detail}")]
    BadRequest { message: String, detail: String },

    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, detail: impl ToString) -> Self {
        AppError::NotFound {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>, detail: impl ToString) -> Self {
        AppError::BadRequest {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl ToString) -> Self {
        AppError::Internal {
            message: message.into(),
            detail: detail.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::NotFound { message, detail } => (StatusCode::NOT_FOUND, message, detail),
            AppError::BadRequest { message, detail } => (StatusCode::BAD_REQUEST, message, detail),
            AppError::Internal { message, detail } => {
                error!("internal error: {}: {}", message, detail);
                (StatusCode::INTERNAL_SERVER_ERROR, message, detail)
            }
            AppError::Database(e) => {
                error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                    e.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            status: status.as_u16(),
            message,
            error: detail,
        });

        (status, body).into_response()
    }
}
