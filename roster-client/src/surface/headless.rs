use crate::render::{DetailPanel, Thumbnail, ThumbnailStrip};
use crate::viewport::StripGeometry;

use super::{CatalogSurface, ScrollBehavior};

/// Fixed-size tiles laid out left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub tile_width: f32,
    pub gap: f32,
    pub container_width: f32,
}

impl StripLayout {
    pub fn stride(&self) -> f32 {
        self.tile_width + self.gap
    }

    /// Left edge of tile `index` in content coordinates.
    pub fn tile_left(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    pub fn content_width(&self, tiles: usize) -> f32 {
        match tiles {
            0 => 0.0,
            n => n as f32 * self.tile_width + (n - 1) as f32 * self.gap,
        }
    }

    pub fn max_scroll(&self, tiles: usize) -> f32 {
        (self.content_width(tiles) - self.container_width).max(0.0)
    }
}

impl Default for StripLayout {
    fn default() -> Self {
        Self {
            tile_width: 100.0,
            gap: 10.0,
            container_width: 500.0,
        }
    }
}

/// In-memory surface: keeps the projected regions and simulates a scrollable
/// strip with native clamping and smooth scrolling.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    layout: StripLayout,
    strip: ThumbnailStrip,
    markers: Vec<bool>,
    detail: Option<DetailPanel>,
    scroll_offset: f32,
    scroll_target: Option<f32>,
    strip_renders: usize,
}

impl HeadlessSurface {
    /// Fraction of the remaining distance covered per animation tick.
    const SMOOTH_FACTOR: f32 = 0.5;

    pub fn new(layout: StripLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn layout(&self) -> StripLayout {
        self.layout
    }

    pub fn tiles(&self) -> &[Thumbnail] {
        &self.strip.tiles
    }

    pub fn detail(&self) -> Option<&DetailPanel> {
        self.detail.as_ref()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.markers.get(index).copied().unwrap_or(false)
    }

    pub fn active_indices(&self) -> Vec<usize> {
        self.markers
            .iter()
            .enumerate()
            .filter_map(|(i, active)| active.then_some(i))
            .collect()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Pending smooth-scroll destination, if an animation is running.
    pub fn scroll_target(&self) -> Option<f32> {
        self.scroll_target
    }

    /// Number of full strip redraws so far.
    pub fn strip_renders(&self) -> usize {
        self.strip_renders
    }

    pub fn set_container_width(&mut self, width: f32) {
        self.layout.container_width = width.max(0.0);
        self.scroll_offset = self.clamp(self.scroll_offset);
        self.scroll_target = self.scroll_target.map(|t| self.clamp(t));
    }

    /// Relative scroll (mouse wheel); cancels any running animation.
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_target = None;
        self.scroll_offset = self.clamp(self.scroll_offset + delta);
    }

    /// Advance a running smooth scroll by one frame. Returns whether the
    /// strip moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        let remaining = target - self.scroll_offset;
        if remaining.abs() < 1.0 {
            self.scroll_offset = target;
            self.scroll_target = None;
        } else {
            self.scroll_offset += remaining * Self::SMOOTH_FACTOR;
        }
        true
    }

    /// Finish any running animation immediately.
    pub fn settle(&mut self) {
        if let Some(target) = self.scroll_target.take() {
            self.scroll_offset = target;
        }
    }

    /// Tile under viewport-relative position `x`, ignoring gaps.
    pub fn hit_test(&self, x: f32) -> Option<usize> {
        if x < 0.0 || x >= self.layout.container_width {
            return None;
        }
        let content_x = x + self.scroll_offset;
        let stride = self.layout.stride();
        if stride <= 0.0 {
            return None;
        }
        let index = (content_x / stride).floor() as usize;
        let within = content_x - self.layout.tile_left(index);
        (index < self.strip.len() && within < self.layout.tile_width)
            .then_some(index)
    }

    /// Visible tiles with their viewport-relative left edge.
    pub fn visible_tiles(&self) -> impl Iterator<Item = (&Thumbnail, f32)> {
        let width = self.layout.container_width;
        let tile_width = self.layout.tile_width;
        self.strip.tiles.iter().filter_map(move |tile| {
            let left = self.layout.tile_left(tile.index) - self.scroll_offset;
            (left + tile_width > 0.0 && left < width).then_some((tile, left))
        })
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.layout.max_scroll(self.strip.len()))
    }
}

impl CatalogSurface for HeadlessSurface {
    fn replace_strip(&mut self, strip: ThumbnailStrip) {
        self.markers = vec![false; strip.len()];
        self.strip = strip;
        self.strip_renders += 1;
        self.scroll_target = None;
        self.scroll_offset = self.clamp(self.scroll_offset);
    }

    fn set_active_marker(&mut self, index: usize, active: bool) {
        if let Some(marker) = self.markers.get_mut(index) {
            *marker = active;
        }
    }

    fn replace_detail(&mut self, panel: DetailPanel) {
        self.detail = Some(panel);
    }

    fn strip_geometry(&self, index: usize) -> Option<StripGeometry> {
        if index >= self.strip.len() {
            return None;
        }
        Some(StripGeometry {
            container_width: self.layout.container_width,
            scroll_offset: self.scroll_offset,
            element_left: self.layout.tile_left(index) - self.scroll_offset,
            element_width: self.layout.tile_width,
        })
    }

    fn scroll_strip_to(&mut self, offset: f32, behavior: ScrollBehavior) {
        let offset = self.clamp(offset);
        match behavior {
            ScrollBehavior::Instant => {
                self.scroll_target = None;
                self.scroll_offset = offset;
            }
            ScrollBehavior::Smooth => self.scroll_target = Some(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSequence;
    use roster_model::CatalogItem;

    fn surface_with(tiles: usize) -> HeadlessSurface {
        let items = (0..tiles)
            .map(|i| CatalogItem::new(format!("item-{i}"), format!("{i}.png")))
            .collect::<Vec<_>>();
        let mut surface = HeadlessSurface::new(StripLayout::default());
        surface.replace_strip(ThumbnailStrip::project(&CatalogSequence::from(
            items,
        )));
        surface
    }

    #[test]
    fn geometry_is_relative_to_visible_edge() {
        let mut surface = surface_with(10);
        surface.scroll_strip_to(220.0, ScrollBehavior::Instant);

        let geometry = surface.strip_geometry(3).unwrap();
        assert_eq!(geometry.scroll_offset, 220.0);
        assert_eq!(geometry.element_left, 330.0 - 220.0);
        assert_eq!(geometry.element_width, 100.0);
        assert!(surface.strip_geometry(10).is_none());
    }

    #[test]
    fn scrolling_clamps_to_native_bounds() {
        // 10 tiles: content 1090 wide, viewport 500
        let mut surface = surface_with(10);
        surface.scroll_strip_to(5_000.0, ScrollBehavior::Instant);
        assert_eq!(surface.scroll_offset(), 590.0);

        surface.scroll_by(-10_000.0);
        assert_eq!(surface.scroll_offset(), 0.0);
    }

    #[test]
    fn smooth_scroll_converges_over_ticks() {
        let mut surface = surface_with(10);
        surface.scroll_strip_to(400.0, ScrollBehavior::Smooth);
        assert_eq!(surface.scroll_offset(), 0.0);
        assert_eq!(surface.scroll_target(), Some(400.0));

        let mut ticks = 0;
        while surface.tick() {
            ticks += 1;
            assert!(ticks < 64, "animation should settle");
        }
        assert_eq!(surface.scroll_offset(), 400.0);
        assert_eq!(surface.scroll_target(), None);
    }

    #[test]
    fn redraw_clears_markers() {
        let mut surface = surface_with(3);
        surface.set_active_marker(1, true);
        assert_eq!(surface.active_indices(), vec![1]);

        surface.replace_strip(ThumbnailStrip::default());
        assert!(surface.active_indices().is_empty());
        assert_eq!(surface.strip_renders(), 2);
    }

    #[test]
    fn hit_test_skips_gaps_and_empty_space() {
        let mut surface = surface_with(3);
        assert_eq!(surface.hit_test(5.0), Some(0));
        assert_eq!(surface.hit_test(105.0), None);
        assert_eq!(surface.hit_test(115.0), Some(1));
        assert_eq!(surface.hit_test(400.0), None);

        surface.set_container_width(100.0);
        surface.scroll_strip_to(110.0, ScrollBehavior::Instant);
        assert_eq!(surface.hit_test(5.0), Some(1));
    }

    #[test]
    fn visible_tiles_include_partial_edges() {
        let mut surface = surface_with(10);
        surface.scroll_strip_to(150.0, ScrollBehavior::Instant);

        let visible: Vec<_> = surface
            .visible_tiles()
            .map(|(tile, left)| (tile.index, left))
            .collect();
        assert_eq!(visible.first(), Some(&(1, -40.0)));
        assert_eq!(visible.last(), Some(&(5, 400.0)));
    }
}
