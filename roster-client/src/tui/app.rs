use ratatui::layout::Rect;

use crate::browser::{CatalogBrowser, CatalogSource, LoadOutcome};
use crate::selection::{Direction, InputEvents};
use crate::surface::{HeadlessSurface, StripLayout};

/// Tile geometry in terminal cells.
pub const STRIP_LAYOUT: StripLayout = StripLayout {
    tile_width: 18.0,
    gap: 1.0,
    container_width: 80.0,
};

/// Terminal application state.
#[derive(Debug)]
pub struct BrowseApp<S> {
    pub(crate) browser: CatalogBrowser<S, HeadlessSurface>,
    /// Inner strip area from the last frame, for mouse hit testing.
    pub(crate) strip_area: Rect,
    pub(crate) should_quit: bool,
    reload_requested: bool,
    /// Animation tick counter
    pub(crate) tick: u64,
}

impl<S: CatalogSource> BrowseApp<S> {
    pub fn new(source: S) -> Self {
        Self {
            browser: CatalogBrowser::new(source, HeadlessSurface::new(STRIP_LAYOUT)),
            strip_area: Rect::default(),
            should_quit: false,
            reload_requested: true,
            tick: 0,
        }
    }

    pub fn browser(&self) -> &CatalogBrowser<S, HeadlessSurface> {
        &self.browser
    }

    pub fn surface(&self) -> &HeadlessSurface {
        self.browser.surface()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn request_reload(&mut self) {
        self.reload_requested = true;
    }

    /// Consume a pending reload request.
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    pub async fn load(&mut self) -> LoadOutcome {
        self.browser.load().await
    }

    pub fn step(&mut self, direction: Direction) {
        self.browser.on_directional_step(direction);
    }

    /// Select the tile under terminal column `column`, if any.
    pub fn click(&mut self, column: u16, row: u16) {
        let area = self.strip_area;
        let inside = column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height);
        if !inside {
            return;
        }
        let x = f32::from(column - area.x);
        if let Some(index) = self.surface().hit_test(x) {
            self.browser.on_thumbnail_activated(index);
        }
    }

    /// Wheel scrolling by whole tiles; does not change the selection.
    pub fn scroll_tiles(&mut self, tiles: f32) {
        let stride = self.surface().layout().stride();
        self.browser.surface_mut().scroll_by(tiles * stride);
    }

    /// The strip's visible width changed; keep the selection centered.
    pub fn set_strip_width(&mut self, width: u16) {
        let width = f32::from(width);
        if self.surface().layout().container_width == width {
            return;
        }
        self.browser.surface_mut().set_container_width(width);
        self.browser.controller_mut().recenter();
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.browser.surface_mut().tick();
    }
}
