//! Keeping the active thumbnail centered in the strip's viewport.

/// Layout of one thumbnail relative to its scrollable container, as reported
/// by the host at the moment of the selection change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    /// Visible width of the container.
    pub container_width: f32,
    /// Current horizontal scroll offset of the container.
    pub scroll_offset: f32,
    /// Element's left edge measured from the container's visible left edge.
    pub element_left: f32,
    pub element_width: f32,
}

impl StripGeometry {
    /// Element center in content coordinates (independent of scrolling).
    pub fn element_center(&self) -> f32 {
        self.element_left + self.scroll_offset + self.element_width / 2.0
    }
}

/// Scroll offset that puts the element's center at the container's center.
///
/// Only the lower bound is clamped; hosts clamp the upper bound to their own
/// maximum scroll.
pub fn centered_scroll_offset(geometry: StripGeometry) -> f32 {
    let target = geometry.element_center() - geometry.container_width / 2.0;
    target.max(0.0)
}
