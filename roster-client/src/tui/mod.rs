//! Terminal host for the carousel.
//!
//! The strip is laid out in terminal cells by a [`HeadlessSurface`]; this
//! module only draws it and translates crossterm input into
//! [`InputEvents`](crate::selection::InputEvents) calls.
//!
//! [`HeadlessSurface`]: crate::surface::HeadlessSurface

mod app;
mod events;
mod ui;

pub use app::{BrowseApp, STRIP_LAYOUT};
pub use events::{Event, EventHandler, handle_key_event, handle_mouse_event};
pub use ui::{render, run_tui};
