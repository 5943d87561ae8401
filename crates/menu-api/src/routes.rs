use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use menu_core::repositories::MenuItemRepository;

use crate::handlers::{health, menu};
use crate::state::AppState;

pub fn build_router<R: MenuItemRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check::<R>))
        // Menu routes
        .route(
            "/menu",
            get(menu::list_menu_items::<R>).post(menu::create_menu_item::<R>),
        )
        .route(
            "/menu/{id}",
            put(menu::update_menu_item::<R>).delete(menu::delete_menu_item::<R>),
        )
        .with_state(state)
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
