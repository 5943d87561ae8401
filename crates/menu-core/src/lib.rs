//! # Menu Core
//!
//! Domain entity, service, and repository trait for the menu service.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

pub use domain::*;
pub use error::DomainError;
