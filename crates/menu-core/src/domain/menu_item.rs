// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// Description: Priced catalog entry and its write-side shapes
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Opaque identifier assigned by the persistence layer.
pub type MenuItemId = String;

/// Stored menu item as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: MenuItemId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Menu item that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewMenuItem {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: Option<String>,

    pub price: f64,

    pub category: Option<String>,
}

impl NewMenuItem {
    pub fn new(
        name: String,
        description: Option<String>,
        price: f64,
        category: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            name: name.trim().to_string(),
            description,
            price,
            category,
        };

        item.validate()?;
        Ok(item)
    }

    /// Attaches the identifier the store assigned on insert.
    pub fn with_id(self, id: MenuItemId) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
        }
    }
}

/// Partial update. Only fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct MenuItemChanges {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub price: Option<f64>,

    pub category: Option<String>,
}

impl MenuItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
    }

    /// Trims the name and validates what remains.
    pub fn normalized(mut self) -> Result<Self, validator::ValidationErrors> {
        self.name = self.name.map(|n| n.trim().to_string());
        self.validate()?;
        Ok(self)
    }

    /// In-process application of the changes, for repositories that hold
    /// items in memory. The MongoDB adapter sends the same fields as `$set`.
    pub fn apply_to(&self, item: &mut MenuItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = Some(description.clone());
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(category) = &self.category {
            item.category = Some(category.clone());
        }
    }
}
