//! Selection state machine for the carousel.
//!
//! States are "no selection" (empty catalog) and "selection = k". Every
//! navigation input funnels through [`SelectionController::select`], which
//! is the only place active markers, the detail panel and the strip scroll
//! are touched.

use roster_model::CatalogItem;
use tracing::debug;

use crate::catalog::CatalogSequence;
use crate::render::{DetailPanel, ThumbnailStrip};
use crate::surface::{CatalogSurface, ScrollBehavior};
use crate::viewport::centered_scroll_offset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Wrapped neighbour of `current` in a sequence of `len` items.
///
/// `None` only when the sequence is empty. A single item wraps to itself.
pub fn wrap_step(current: usize, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.min(len - 1);
    Some(match direction {
        Direction::Left if current == 0 => len - 1,
        Direction::Left => current - 1,
        Direction::Right => (current + 1) % len,
    })
}

/// Host input, already translated into catalog terms.
///
/// Pointer and keyboard bindings both land here so they cannot diverge.
pub trait InputEvents {
    /// A thumbnail was clicked or otherwise activated.
    fn on_thumbnail_activated(&mut self, index: usize);

    fn on_directional_step(&mut self, direction: Direction);
}

/// Owns the loaded sequence, the current index and the surface it draws on.
#[derive(Debug)]
pub struct SelectionController<V> {
    catalog: CatalogSequence,
    current: Option<usize>,
    surface: V,
}

impl<V: CatalogSurface> SelectionController<V> {
    pub fn new(surface: V) -> Self {
        Self {
            catalog: CatalogSequence::default(),
            current: None,
            surface,
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_item(&self) -> Option<&CatalogItem> {
        self.current.and_then(|i| self.catalog.get(i))
    }

    pub fn catalog(&self) -> &CatalogSequence {
        &self.catalog
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    pub fn into_surface(self) -> V {
        self.surface
    }

    /// Install a freshly loaded sequence.
    ///
    /// Always redraws the whole strip. A non-empty sequence selects index 0;
    /// an empty one leaves "no selection" and does not touch the detail panel.
    pub fn replace_catalog(&mut self, catalog: CatalogSequence) {
        self.surface.replace_strip(ThumbnailStrip::project(&catalog));
        self.catalog = catalog;
        self.current = None;
        if !self.catalog.is_empty() {
            self.select(0);
        }
    }

    /// Make `index` the active item. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        let Some(item) = self.catalog.get(index) else {
            debug!(index, len = self.catalog.len(), "ignoring selection outside catalog");
            return None;
        };
        let panel = DetailPanel::project(item);

        self.current = Some(index);
        for k in 0..self.catalog.len() {
            self.surface.set_active_marker(k, k == index);
        }
        self.surface.replace_detail(panel);
        self.recenter();
        Some(index)
    }

    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        let current = self.current?;
        let target = wrap_step(current, self.catalog.len(), direction)?;
        self.select(target)
    }

    pub fn step_left(&mut self) -> Option<usize> {
        self.step(Direction::Left)
    }

    pub fn step_right(&mut self) -> Option<usize> {
        self.step(Direction::Right)
    }

    /// Scroll the active thumbnail to the middle of the strip using the
    /// surface's current geometry. Hosts call this again after a resize.
    pub fn recenter(&mut self) {
        let Some(index) = self.current else {
            return;
        };
        match self.surface.strip_geometry(index) {
            Some(geometry) => {
                let offset = centered_scroll_offset(geometry);
                self.surface.scroll_strip_to(offset, ScrollBehavior::Smooth);
            }
            None => debug!(index, "no strip geometry, skipping centering"),
        }
    }

    /// Replace the detail panel with an error. Selection and strip stay as
    /// they are.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.surface.replace_detail(DetailPanel::error(message));
    }
}

impl<V: CatalogSurface> InputEvents for SelectionController<V> {
    fn on_thumbnail_activated(&mut self, index: usize) {
        self.select(index);
    }

    fn on_directional_step(&mut self, direction: Direction) {
        self.step(direction);
    }
}
