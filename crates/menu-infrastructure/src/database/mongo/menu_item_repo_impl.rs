// ============================================================================
// Menu Infrastructure - MongoDB Menu Item Repository
// File: crates/menu-infrastructure/src/database/mongo/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::ReturnDocument,
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use menu_core::domain::{MenuItem, MenuItemChanges, NewMenuItem};
use menu_core::error::DomainError;
use menu_core::repositories::MenuItemRepository;
use menu_shared::constants::MENU_ITEM_COLLECTION;

#[derive(Clone)]
pub struct MongoMenuItemRepository {
    database: Database,
    collection: Collection<MenuItemDocument>,
}

impl MongoMenuItemRepository {
    pub fn new(database: Database) -> Self {
        let collection = database.collection(MENU_ITEM_COLLECTION);
        Self {
            database,
            collection,
        }
    }
}

// Stored shape; `__v` and other foreign keys are ignored on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MenuItemDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MenuItemDocument {
    fn from_new(id: ObjectId, item: &NewMenuItem) -> Self {
        Self {
            id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            category: item.category.clone(),
        }
    }
}

impl From<MenuItemDocument> for MenuItem {
    fn from(document: MenuItemDocument) -> Self {
        MenuItem {
            id: document.id.to_hex(),
            name: document.name,
            description: document.description,
            price: document.price,
            category: document.category,
        }
    }
}

/// `$set` body holding only the supplied fields.
fn set_document(changes: &MenuItemChanges) -> Document {
    let mut set = Document::new();
    if let Some(name) = &changes.name {
        set.insert("name", name.as_str());
    }
    if let Some(description) = &changes.description {
        set.insert("description", description.as_str());
    }
    if let Some(price) = changes.price {
        set.insert("price", price);
    }
    if let Some(category) = &changes.category {
        set.insert("category", category.as_str());
    }
    set
}

// An identifier that is not an ObjectId cannot match any record.
fn parse_id(id: &str) -> Option<ObjectId> {
    match ObjectId::parse_str(id) {
        Ok(oid) => Some(oid),
        Err(_) => {
            debug!("Identifier is not an ObjectId: {}", id);
            None
        }
    }
}

#[async_trait]
impl MenuItemRepository for MongoMenuItemRepository {
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DomainError> {
        let document = MenuItemDocument::from_new(ObjectId::new(), item);

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| {
                error!("Database error creating menu item: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        info!("Menu item inserted: {}", document.id);
        Ok(item.clone().with_id(document.id.to_hex()))
    }

    async fn find_all(&self) -> Result<Vec<MenuItem>, DomainError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| {
                error!("Database error listing menu items: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        let documents: Vec<MenuItemDocument> = cursor.try_collect().await.map_err(|e| {
            error!("Database error reading menu item cursor: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(documents.into_iter().map(MenuItem::from).collect())
    }

    async fn update(
        &self,
        id: &str,
        changes: &MenuItemChanges,
    ) -> Result<Option<MenuItem>, DomainError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set_document(changes) })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                error!("Database error updating menu item {}: {}", id, e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(updated.map(MenuItem::from))
    }

    async fn delete(&self, id: &str) -> Result<Option<MenuItem>, DomainError> {
        let Some(oid) = parse_id(id) else {
            return Ok(None);
        };

        let removed = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(|e| {
                error!("Database error deleting menu item {}: {}", id, e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(removed.map(MenuItem::from))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| {
                error!("Database ping failed: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_set_document_only_has_supplied_fields() {
        let changes = MenuItemChanges {
            description: Some("with cheese".to_string()),
            price: Some(10.0),
            ..Default::default()
        };

        let set = set_document(&changes);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get_str("description").unwrap(), "with cheese");
        assert_eq!(set.get_f64("price").unwrap(), 10.0);
        assert!(!set.contains_key("name"));
    }

    #[test]
    fn test_invalid_identifier_matches_nothing() {
        assert!(parse_id("not-an-object-id").is_none());
        assert!(parse_id("65f0c0ffee0000000000beef").is_some());
    }

    #[test]
    fn test_document_maps_to_hex_identifier() {
        let oid = ObjectId::new();
        let item = NewMenuItem::new("Burger".to_string(), None, 9.5, None).unwrap();

        let menu_item: MenuItem = MenuItemDocument::from_new(oid, &item).into();

        assert_eq!(menu_item.id, oid.to_hex());
        assert_eq!(menu_item.name, "Burger");
        assert_eq!(menu_item.price, 9.5);
    }

    #[test]
    fn test_inserted_document_matches_returned_item() {
        let oid = ObjectId::new();
        let item = NewMenuItem::new("Soup".to_string(), Some("Tomato".to_string()), 4.0, None)
            .unwrap();

        let from_document: MenuItem = MenuItemDocument::from_new(oid, &item).into();

        assert_eq!(from_document, item.with_id(oid.to_hex()));
    }

    #[test]
    fn test_every_schema_price_type_reads_as_double() {
        let oid = ObjectId::new();
        for price in [Bson::Double(9.5), Bson::Int32(9), Bson::Int64(9)] {
            let raw = doc! { "_id": oid, "name": "Tea", "price": price.clone() };

            let document: MenuItemDocument = mongodb::bson::from_document(raw).unwrap();

            assert!(document.price > 0.0, "price {:?} did not decode", price);
        }
    }

    #[test]
    fn test_integer_price_reads_as_double() {
        let oid = ObjectId::new();
        let raw = doc! { "_id": oid, "name": "Tea", "price": 3_i32, "__v": 0_i32 };

        let document: MenuItemDocument = mongodb::bson::from_document(raw).unwrap();

        assert_eq!(document.price, 3.0);
        assert_eq!(document.description, None);
    }

    // Needs a reachable MongoDB; run with MONGO_URI set and `--ignored`.
    #[ignore]
    #[tokio::test]
    async fn test_round_trip_against_live_database() {
        let settings = menu_shared::config::DatabaseSettings {
            url: std::env::var("MONGO_URI").unwrap(),
            name: "menu_test".to_string(),
            connect_timeout_secs: 5,
            server_selection_timeout_secs: 5,
        };
        let database = crate::database::connect(&settings, "menu-tests").await.unwrap();
        crate::database::ensure_menu_item_collection(&database).await.unwrap();
        let repo = MongoMenuItemRepository::new(database);

        let item = NewMenuItem::new("Burger".to_string(), None, 9.5, None).unwrap();
        let created = repo.create(&item).await.unwrap();

        let changes = MenuItemChanges {
            description: Some("with cheese".to_string()),
            ..Default::default()
        };
        let updated = repo.update(&created.id, &changes).await.unwrap().unwrap();
        assert_eq!(updated.name, "Burger");
        assert_eq!(updated.description.as_deref(), Some("with cheese"));

        assert!(repo.delete(&created.id).await.unwrap().is_some());
        let remaining = repo.find_all().await.unwrap();
        assert!(remaining.iter().all(|m| m.id != created.id));
    }
}
