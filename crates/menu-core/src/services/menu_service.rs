// ============================================================================
// Menu Core - Menu Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! Menu item use cases: one validation step, one repository call.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{MenuItem, MenuItemChanges, NewMenuItem};
use crate::error::DomainError;
use crate::repositories::MenuItemRepository;

pub const MISSING_REQUIRED_FIELDS: &str = "Name and price are required";
pub const NO_FIELDS_TO_UPDATE: &str =
    "At least one field (name, description, price, or category) is required to update";

/// Raw create input; presence of `name` and `price` is checked here.
#[derive(Debug, Clone, Default)]
pub struct CreateMenuItemInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

pub struct MenuService<R: MenuItemRepository> {
    repo: Arc<R>,
}

impl<R: MenuItemRepository> MenuService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a menu item
    pub async fn create(&self, input: CreateMenuItemInput) -> Result<MenuItem, DomainError> {
        let (name, price) = match (input.name, input.price) {
            (Some(name), Some(price)) => (name, price),
            _ => {
                warn!("Create rejected: name or price missing");
                return Err(DomainError::ValidationError(MISSING_REQUIRED_FIELDS.to_string()));
            }
        };

        let item = NewMenuItem::new(name, input.description, price, input.category)
            .map_err(|e| {
                warn!("Create rejected: {}", e);
                DomainError::ValidationError(MISSING_REQUIRED_FIELDS.to_string())
            })?;

        let created = self.repo.create(&item).await?;
        info!("Menu item created: {}", created.id);
        Ok(created)
    }

    /// List every menu item
    pub async fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.repo.find_all().await
    }

    /// Partially update a menu item
    pub async fn update(
        &self,
        id: &str,
        changes: MenuItemChanges,
    ) -> Result<MenuItem, DomainError> {
        if changes.is_empty() {
            warn!("Update rejected for {}: no fields supplied", id);
            return Err(DomainError::ValidationError(NO_FIELDS_TO_UPDATE.to_string()));
        }

        let changes = changes.normalized().map_err(|e| {
            warn!("Update rejected for {}: {}", id, e);
            DomainError::ValidationError(e.to_string())
        })?;

        let updated = self
            .repo
            .update(id, &changes)
            .await?
            .ok_or_else(|| DomainError::MenuItemNotFound(id.to_string()))?;

        info!("Menu item updated: {}", id);
        Ok(updated)
    }

    /// Delete a menu item
    pub async fn delete(&self, id: &str) -> Result<MenuItem, DomainError> {
        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::MenuItemNotFound(id.to_string()))?;

        info!("Menu item deleted: {}", id);
        Ok(removed)
    }

    /// Check that the store answers
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repo.ping().await
    }
}
