//! The catalog client: one fetch, then hand the result to the controller.

use async_trait::async_trait;
use roster_model::CatalogItem;
use tracing::{error, info};

use crate::catalog::CatalogSequence;
use crate::error::{ClientError, Result};
use crate::selection::{Direction, InputEvents, SelectionController};
use crate::surface::CatalogSurface;

/// Where catalog items come from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<CatalogItem>>;

    /// Human-readable location of the service, used in error messages.
    fn endpoint(&self) -> String;
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Empty,
    /// The detail panel now shows the load error.
    Failed(ClientError),
}

impl LoadOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }
}

/// Text shown in the detail panel when a load fails.
pub fn load_error_message(endpoint: &str) -> String {
    format!(
        "Error loading catalog. Make sure the server is running at {endpoint}."
    )
}

#[derive(Debug)]
pub struct CatalogBrowser<S, V> {
    source: S,
    controller: SelectionController<V>,
}

impl<S: CatalogSource, V: CatalogSurface> CatalogBrowser<S, V> {
    pub fn new(source: S, surface: V) -> Self {
        Self {
            source,
            controller: SelectionController::new(surface),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn controller(&self) -> &SelectionController<V> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SelectionController<V> {
        &mut self.controller
    }

    pub fn surface(&self) -> &V {
        self.controller.surface()
    }

    pub fn surface_mut(&mut self) -> &mut V {
        self.controller.surface_mut()
    }

    /// Fetch the catalog and render it.
    ///
    /// Safe to call repeatedly. A failure leaves the previous sequence and
    /// strip in place and only replaces the detail panel.
    pub async fn load(&mut self) -> LoadOutcome {
        match self.source.fetch_items().await {
            Ok(items) => {
                let count = items.len();
                info!(count, "catalog loaded");
                self.controller.replace_catalog(CatalogSequence::from(items));
                if count == 0 {
                    LoadOutcome::Empty
                } else {
                    LoadOutcome::Loaded { count }
                }
            }
            Err(err) => {
                error!(error = %err, "failed to load catalog");
                self.controller
                    .report_error(load_error_message(&self.source.endpoint()));
                LoadOutcome::Failed(err)
            }
        }
    }
}

impl<S: CatalogSource, V: CatalogSurface> InputEvents for CatalogBrowser<S, V> {
    fn on_thumbnail_activated(&mut self, index: usize) {
        self.controller.on_thumbnail_activated(index);
    }

    fn on_directional_step(&mut self, direction: Direction) {
        self.controller.on_directional_step(direction);
    }
}
