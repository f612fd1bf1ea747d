//! # Roster Server
//!
//! Read-only catalog listing service.
//!
//! Exposes the catalog table as a JSON array at
//! [`roster_model::api::routes::v1::catalog::ITEMS`], backed by PostgreSQL
//! through the [`catalog::CatalogRepository`] port.

pub mod app;
pub mod catalog;
pub mod db;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use app::create_app;
pub use infra::app_state::AppState;
