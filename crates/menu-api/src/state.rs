use std::sync::Arc;

use menu_core::repositories::MenuItemRepository;
use menu_core::services::MenuService;

pub struct AppState<R: MenuItemRepository> {
    pub menu_service: Arc<MenuService<R>>,
}

impl<R: MenuItemRepository> AppState<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            menu_service: Arc::new(MenuService::new(repo)),
        }
    }
}

// Manual impl: `R` itself need not be `Clone`.
impl<R: MenuItemRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            menu_service: self.menu_service.clone(),
        }
    }
}
