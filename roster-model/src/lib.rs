//! Catalog data model and route definitions shared across Roster crates.
#![allow(missing_docs)]

pub mod api;
pub mod catalog;

pub use catalog::CatalogItem;
