//! Domain entities for the menu service.

pub mod menu_item;

pub use menu_item::{MenuItem, MenuItemChanges, MenuItemId, NewMenuItem};
