//! Database module (MongoDB adapters)

pub mod connection;
pub mod schema;
pub mod mongo;

pub use connection::connect;
pub use schema::ensure_menu_item_collection;
pub use mongo::MongoMenuItemRepository;
