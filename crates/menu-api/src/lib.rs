//! # Menu API
//!
//! HTTP handlers, DTOs, error mapping, and router for the menu service.

pub mod handlers;
pub mod dto;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;

pub use routes::build_router;
pub use state::AppState;
