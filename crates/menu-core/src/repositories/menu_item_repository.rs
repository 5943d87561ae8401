//! Menu item repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{MenuItem, MenuItemChanges, NewMenuItem};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Persists a new item; the store assigns its identifier.
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DomainError>;

    /// All stored items in creation order.
    async fn find_all(&self) -> Result<Vec<MenuItem>, DomainError>;

    /// Returns the updated item, or `None` when nothing matches `id`.
    async fn update(
        &self,
        id: &str,
        changes: &MenuItemChanges,
    ) -> Result<Option<MenuItem>, DomainError>;

    /// Returns the removed item, or `None` when nothing matches `id`.
    async fn delete(&self, id: &str) -> Result<Option<MenuItem>, DomainError>;

    async fn ping(&self) -> Result<(), DomainError>;
}
