//! Drawing and the main loop.

use std::io::{self, stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    backend::CrosstermBackend,
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tokio::runtime::Runtime;
use tracing::debug;

use super::app::BrowseApp;
use super::events::{Event, EventHandler, handle_key_event, handle_mouse_event};
use crate::browser::CatalogSource;
use crate::render::{DetailPanel, ItemDetail};

const STRIP_HEIGHT: u16 = 4;

/// Run the browser until the user quits. Loads go through `runtime`.
pub fn run_tui<S: CatalogSource>(app: &mut BrowseApp<S>, runtime: &Runtime) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::default();
    let result = (|| -> io::Result<()> {
        loop {
            terminal.draw(|frame| render(frame, app))?;

            if app.take_reload_request() {
                let outcome = runtime.block_on(app.load());
                debug!(?outcome, "reload finished");
                continue;
            }

            match events.next()? {
                Event::Key(key) => handle_key_event(app, key),
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                // picked up by the next frame's layout
                Event::Resize(_, _) => {}
                Event::Tick => app.on_tick(),
            }

            if app.should_quit() {
                return Ok(());
            }
        }
    })();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Draw one frame. Also records the strip's inner area so mouse input and
/// centering use the geometry that is actually on screen.
pub fn render<S: CatalogSource>(frame: &mut Frame, app: &mut BrowseApp<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(STRIP_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_header(frame, chunks[0], app);

    let strip_block = Block::default().borders(Borders::TOP | Borders::BOTTOM);
    let strip_inner = strip_block.inner(chunks[1]);
    frame.render_widget(strip_block, chunks[1]);
    app.strip_area = strip_inner;
    app.set_strip_width(strip_inner.width);
    render_strip(frame, strip_inner, app);

    render_detail(frame, chunks[2], app.surface().detail());
    render_footer(frame, chunks[3]);
}

fn render_header<S: CatalogSource>(frame: &mut Frame, area: Rect, app: &BrowseApp<S>) {
    let browser = app.browser();
    let position = match browser.controller().current() {
        Some(index) => format!("{}/{}", index + 1, browser.controller().catalog().len()),
        None => "-".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(" Catalog ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(position),
        Span::styled(
            format!("  {}", browser.source().endpoint()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_strip<S: CatalogSource>(frame: &mut Frame, area: Rect, app: &BrowseApp<S>) {
    let surface = app.surface();
    let tile_width = surface.layout().tile_width.round() as i32;
    let max_x = i32::from(area.width);

    for (tile, left) in surface.visible_tiles() {
        let left = left.round() as i32;
        let x0 = left.max(0);
        let x1 = (left + tile_width).min(max_x);
        if x1 <= x0 {
            continue;
        }
        let rect = Rect {
            x: area.x + x0 as u16,
            y: area.y,
            width: (x1 - x0) as u16,
            height: area.height,
        };
        let style = if surface.is_active(tile.index) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };
        let text = vec![
            Line::from(format!(" {}", tile.alias)),
            Line::from(Span::styled(
                format!(" {}", tile.image),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        let clipped = (x0 - left) as u16;
        frame.render_widget(
            Paragraph::new(text).style(style).scroll((0, clipped)),
            rect,
        );
    }
}

fn render_detail(frame: &mut Frame, area: Rect, panel: Option<&DetailPanel>) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");
    let paragraph = match panel {
        Some(DetailPanel::Item(detail)) => Paragraph::new(detail_lines(detail)),
        Some(DetailPanel::Error(message)) => Paragraph::new(message.as_str()).style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        None => Paragraph::new("No item selected.")
            .style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}

fn detail_lines(detail: &ItemDetail) -> Vec<Line<'_>> {
    let label = Style::default().fg(Color::Cyan);
    let mut lines = vec![
        Line::styled(
            detail.heading(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("\"{}\"", detail.quote),
            Style::default().add_modifier(Modifier::ITALIC),
        ),
        Line::default(),
    ];
    for fact in &detail.facts {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", fact.label), label),
            Span::raw(fact.value.as_str()),
        ]));
    }
    lines.push(Line::default());
    for ability in &detail.abilities {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", ability.label), label),
            Span::raw(ability.name.as_str()),
        ]));
        if let Some(reference) = &ability.reference {
            lines.push(Line::styled(
                format!("  {reference}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        detail.wiki.as_str(),
        Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
    ));
    lines
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = " ←/→ select  click select  wheel scroll  r reload  q quit";
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use ratatui::backend::TestBackend;
    use roster_model::CatalogItem;

    use super::*;
    use crate::error::{ClientError, Result};

    struct StaticSource(Option<Vec<CatalogItem>>);

    #[async_trait]
    impl CatalogSource for StaticSource {
        async fn fetch_items(&self) -> Result<Vec<CatalogItem>> {
            self.0.clone().ok_or(ClientError::Status {
                status: 500,
                message: "Database query failed".into(),
            })
        }

        fn endpoint(&self) -> String {
            "http://localhost:3000".into()
        }
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw<S: CatalogSource>(app: &mut BrowseApp<S>) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
    }

    #[tokio::test]
    async fn draws_strip_and_selected_detail() {
        let mut app = BrowseApp::new(StaticSource(Some(vec![
            CatalogItem::new("Alpha", "alpha.png"),
            CatalogItem::new("Bravo", "bravo.png"),
        ])));
        draw(&mut app);
        app.load().await;

        let text = screen(&draw(&mut app));
        assert!(text.contains("Alpha"));
        assert!(text.contains("Bravo"));
        assert!(text.contains("Alpha (Unknown)"));
        assert!(text.contains("1/2"));
    }

    #[tokio::test]
    async fn click_on_tile_selects_it() {
        let mut app = BrowseApp::new(StaticSource(Some(vec![
            CatalogItem::new("Alpha", "alpha.png"),
            CatalogItem::new("Bravo", "bravo.png"),
        ])));
        app.load().await;
        draw(&mut app);

        let area = app.strip_area;
        // second tile starts one stride in
        app.click(area.x + 20, area.y);
        assert_eq!(app.browser().controller().current(), Some(1));

        // gap between tiles
        app.click(area.x + 18, area.y);
        assert_eq!(app.browser().controller().current(), Some(1));

        let text = screen(&draw(&mut app));
        assert!(text.contains("Bravo (Unknown)"));
    }

    #[tokio::test]
    async fn failed_load_shows_error_text() {
        let mut app = BrowseApp::new(StaticSource(None));
        draw(&mut app);
        assert!(app.load().await.is_failed());

        let text = screen(&draw(&mut app));
        assert!(text.contains("Error loading catalog"));
    }

    #[test]
    fn strip_width_follows_terminal() {
        let mut app = BrowseApp::new(StaticSource(Some(Vec::new())));
        draw(&mut app);
        assert_eq!(app.surface().layout().container_width, 80.0);

        let mut narrow = Terminal::new(TestBackend::new(40, 30)).unwrap();
        narrow.draw(|frame| render(frame, &mut app)).unwrap();
        assert_eq!(app.surface().layout().container_width, 40.0);
    }
}
