//! HTTP request handlers organized by functionality

pub mod catalog;
pub mod health;

pub use catalog::list_catalog_items_handler;
pub use health::{health_handler, not_found_handler, ping_handler};
