//! API response wrapper

use serde::Serialize;

/// `{ message, data? }` envelope used by the write endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> MessageResponse<T> {
    pub fn with_data(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl MessageResponse<()> {
    pub fn message_only(message: &str) -> Self {
        Self {
            message: message.to_string(),
            data: None,
        }
    }
}
