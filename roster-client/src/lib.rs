//! # Roster Client
//!
//! Fetches the catalog once and drives a carousel over it: a strip of
//! thumbnails, a detail panel for the selected item, and a selection that
//! is kept centered in the strip's viewport.
//!
//! The host (terminal, browser, test harness) plugs in through
//! [`surface::CatalogSurface`] and feeds user input through
//! [`selection::InputEvents`].

pub mod api_client;
pub mod browser;
pub mod catalog;
pub mod error;
pub mod render;
pub mod selection;
pub mod surface;
pub mod tui;
pub mod viewport;

pub use api_client::ApiClient;
pub use browser::{CatalogBrowser, CatalogSource, LoadOutcome};
pub use catalog::CatalogSequence;
pub use error::ClientError;
pub use selection::{Direction, InputEvents, SelectionController};
