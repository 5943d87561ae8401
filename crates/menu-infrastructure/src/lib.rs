//! # Menu Infrastructure
//!
//! MongoDB implementations (adapters) of the menu core ports.

pub mod database;

pub use database::{connect, ensure_menu_item_collection, MongoMenuItemRepository};
