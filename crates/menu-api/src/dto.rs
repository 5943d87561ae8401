//! Request payloads

use serde::Deserialize;

use menu_core::domain::MenuItemChanges;
use menu_core::services::CreateMenuItemInput;

/// POST /menu body. Presence is checked by the service, not by serde.
#[derive(Debug, Deserialize)]
pub struct CreateMenuItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl From<CreateMenuItemRequest> for CreateMenuItemInput {
    fn from(request: CreateMenuItemRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
        }
    }
}

/// PUT /menu/{id} body
#[derive(Debug, Deserialize)]
pub struct UpdateMenuItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl From<UpdateMenuItemRequest> for MenuItemChanges {
    fn from(request: UpdateMenuItemRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
        }
    }
}
