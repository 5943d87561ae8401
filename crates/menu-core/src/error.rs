//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
