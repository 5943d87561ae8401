//! Collection bootstrap and server-side validation rules

use mongodb::{
    bson::{doc, Document},
    error::{Error, ErrorKind},
    Database,
};
use tracing::{debug, info};

use menu_shared::constants::MENU_ITEM_COLLECTION;

const NAMESPACE_EXISTS: i32 = 48;

/// Numeric types that deserialize into an `f64` price.
/// `decimal` is left out: Decimal128 does not deserialize into `f64`.
pub const PRICE_BSON_TYPES: [&str; 3] = ["double", "int", "long"];

/// `$jsonSchema` enforcing the stored-record invariant: a non-empty
/// `name` and a numeric `price`.
pub fn menu_item_validator() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["name", "price"],
            "properties": {
                "name": { "bsonType": "string", "minLength": 1 },
                "description": { "bsonType": "string" },
                "price": { "bsonType": PRICE_BSON_TYPES.to_vec() },
                "category": { "bsonType": "string" },
            },
        }
    }
}

/// Creates the menu item collection with its validator. An existing
/// collection is left as it is.
pub async fn ensure_menu_item_collection(database: &Database) -> Result<(), Error> {
    let existing = database
        .list_collection_names()
        .filter(doc! { "name": MENU_ITEM_COLLECTION })
        .await?;

    if !existing.is_empty() {
        debug!("Collection {} already present", MENU_ITEM_COLLECTION);
        return Ok(());
    }

    match database
        .create_collection(MENU_ITEM_COLLECTION)
        .validator(menu_item_validator())
        .await
    {
        Ok(()) => {
            info!("Created collection {} with schema validator", MENU_ITEM_COLLECTION);
            Ok(())
        }
        // another instance won the race
        Err(e) if is_namespace_exists(&e) => Ok(()),
        Err(e) => Err(e),
    }
}

fn is_namespace_exists(error: &Error) -> bool {
    matches!(*error.kind, ErrorKind::Command(ref command) if command.code == NAMESPACE_EXISTS)
}
