use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use menu_core::error::DomainError;

pub const MENU_ITEM_NOT_FOUND: &str = "Menu item not found";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// `message` goes to the client, `detail` only to the log.
    #[error("Persistence error: {message}: {detail}")]
    Persistence {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// Maps a service failure; `failure` is the generic text returned for store errors.
    pub fn from_domain(error: DomainError, failure: &'static str) -> Self {
        match error {
            DomainError::ValidationError(msg) => ApiError::Validation(msg),
            DomainError::MenuItemNotFound(id) => {
                tracing::debug!("No menu item with id {}", id);
                ApiError::NotFound(MENU_ITEM_NOT_FOUND.to_string())
            }
            DomainError::DatabaseError(detail) => ApiError::Persistence {
                message: failure,
                detail,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                (StatusCode::BAD_REQUEST, "ValidationError", msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFoundError", msg)
            }
            ApiError::Persistence { message, detail } => {
                tracing::error!("Persistence error: {}: {}", message, detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PersistenceError",
                    message.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_hides_detail() {
        let error = ApiError::from_domain(
            DomainError::DatabaseError("auth failed for user admin".to_string()),
            "Failed to fetch menu items",
        );

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_uses_fixed_message() {
        let error = ApiError::from_domain(
            DomainError::MenuItemNotFound("abc".to_string()),
            "Failed to delete menu item",
        );

        assert!(matches!(error, ApiError::NotFound(ref msg) if msg == MENU_ITEM_NOT_FOUND));
    }
}
