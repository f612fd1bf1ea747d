//! Host seam: where the strip and the detail panel actually live.

pub mod headless;

pub use headless::{HeadlessSurface, StripLayout};

use crate::render::{DetailPanel, ThumbnailStrip};
use crate::viewport::StripGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animate toward the target.
    Smooth,
    Instant,
}

pub trait CatalogSurface {
    /// Replace every thumbnail. Markers start cleared.
    fn replace_strip(&mut self, strip: ThumbnailStrip);

    fn set_active_marker(&mut self, index: usize, active: bool);

    /// Replace the whole detail panel.
    fn replace_detail(&mut self, panel: DetailPanel);

    /// Current layout of thumbnail `index`, or `None` when it has no layout.
    fn strip_geometry(&self, index: usize) -> Option<StripGeometry>;

    /// Hosts clamp `offset` to their own maximum scroll.
    fn scroll_strip_to(&mut self, offset: f32, behavior: ScrollBehavior);
}
