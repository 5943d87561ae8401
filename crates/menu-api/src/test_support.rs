//! In-memory repository for router tests

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use menu_core::domain::{MenuItem, MenuItemChanges, NewMenuItem};
use menu_core::error::DomainError;
use menu_core::repositories::MenuItemRepository;

#[derive(Default)]
pub struct InMemoryMenuItemRepository {
    items: Mutex<Vec<MenuItem>>,
    next_id: AtomicU64,
    failing: AtomicBool,
}

impl InMemoryMenuItemRepository {
    /// Makes every subsequent call fail like an unreachable store.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryMenuItemRepository {
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DomainError> {
        self.check()?;
        let id = format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = item.clone().with_id(id);
        self.items.lock().push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.check()?;
        Ok(self.items.lock().clone())
    }

    async fn update(
        &self,
        id: &str,
        changes: &MenuItemChanges,
    ) -> Result<Option<MenuItem>, DomainError> {
        self.check()?;
        let mut items = self.items.lock();
        Ok(items.iter_mut().find(|m| m.id == id).map(|item| {
            changes.apply_to(item);
            item.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<Option<MenuItem>, DomainError> {
        self.check()?;
        let mut items = self.items.lock();
        let index = items.iter().position(|m| m.id == id);
        Ok(index.map(|index| items.remove(index)))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.check()
    }
}
