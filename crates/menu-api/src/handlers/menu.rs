// ============================================================================
// Menu API - Menu Item Handlers
// File: crates/menu-api/src/handlers/menu.rs
// ============================================================================
//! CRUD handlers for `/menu`

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use menu_core::domain::MenuItem;
use menu_core::repositories::MenuItemRepository;

use crate::dto::{CreateMenuItemRequest, UpdateMenuItemRequest};
use crate::error::ApiError;
use crate::response::MessageResponse;
use crate::state::AppState;

pub const CREATED_MESSAGE: &str = "Menu item created successfully";
pub const UPDATED_MESSAGE: &str = "Menu item updated successfully";
pub const DELETED_MESSAGE: &str = "Menu item deleted successfully";

/// Create handler - POST /menu
pub async fn create_menu_item<R: MenuItemRepository + 'static>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateMenuItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse<MenuItem>>), ApiError> {
    let Json(payload) = payload?;

    let item = state
        .menu_service
        .create(payload.into())
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to create menu item"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_data(CREATED_MESSAGE, item)),
    ))
}

/// List handler - GET /menu
pub async fn list_menu_items<R: MenuItemRepository + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let items = state
        .menu_service
        .list()
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to fetch menu items"))?;

    Ok(Json(items))
}

/// Update handler - PUT /menu/{id}
pub async fn update_menu_item<R: MenuItemRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateMenuItemRequest>, JsonRejection>,
) -> Result<Json<MessageResponse<MenuItem>>, ApiError> {
    let Json(payload) = payload?;

    let item = state
        .menu_service
        .update(&id, payload.into())
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to update menu item"))?;

    Ok(Json(MessageResponse::with_data(UPDATED_MESSAGE, item)))
}

/// Delete handler - DELETE /menu/{id}
pub async fn delete_menu_item<R: MenuItemRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse<()>>, ApiError> {
    state
        .menu_service
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_domain(e, "Failed to delete menu item"))?;

    Ok(Json(MessageResponse::message_only(DELETED_MESSAGE)))
}
