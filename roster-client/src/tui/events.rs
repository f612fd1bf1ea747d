//! Input polling and dispatch.

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};

use super::app::BrowseApp;
use crate::browser::CatalogSource;
use crate::selection::Direction;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Nothing happened within the tick rate; drives scroll animation.
    Tick,
    Resize(u16, u16),
}

#[derive(Debug)]
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Block for at most one tick waiting for input.
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => {
                    Ok(Event::Resize(width, height))
                }
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(33)
    }
}

pub fn handle_key_event<S: CatalogSource>(app: &mut BrowseApp<S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
        }
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Left | KeyCode::Char('h') => app.step(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => app.step(Direction::Right),
        KeyCode::Char('r') => app.request_reload(),
        _ => {}
    }
}

pub fn handle_mouse_event<S: CatalogSource>(app: &mut BrowseApp<S>, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        MouseEventKind::ScrollUp => app.scroll_tiles(-1.0),
        MouseEventKind::ScrollDown => app.scroll_tiles(1.0),
        _ => {}
    }
}
