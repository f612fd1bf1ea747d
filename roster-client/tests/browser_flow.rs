use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use roster_client::error::Result;
use roster_client::render::DetailPanel;
use roster_client::surface::{HeadlessSurface, StripLayout};
use roster_client::{CatalogBrowser, CatalogSource, ClientError, Direction, InputEvents, LoadOutcome};
use roster_model::CatalogItem;

enum Reply {
    Items(Vec<CatalogItem>),
    Refused,
}

/// Source that plays back canned replies in order, repeating the last one.
struct ScriptedSource {
    replies: Mutex<VecDeque<Reply>>,
}

impl ScriptedSource {
    fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
        }
    }
}

#[async_trait]
impl CatalogSource for ScriptedSource {
    async fn fetch_items(&self) -> Result<Vec<CatalogItem>> {
        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().map(|r| match r {
                Reply::Items(items) => Reply::Items(items.clone()),
                Reply::Refused => Reply::Refused,
            })
        };
        match reply {
            Some(Reply::Items(items)) => Ok(items),
            Some(Reply::Refused) | None => Err(ClientError::Status {
                status: 503,
                message: "connection refused".into(),
            }),
        }
    }

    fn endpoint(&self) -> String {
        "http://localhost:3000".into()
    }
}

fn item(alias: &str, class: &str) -> CatalogItem {
    CatalogItem {
        class: Some(class.into()),
        quote: Some(format!("{alias} says hi")),
        ..CatalogItem::new(alias, format!("{alias}.png"))
    }
}

fn browser(replies: impl IntoIterator<Item = Reply>) -> CatalogBrowser<ScriptedSource, HeadlessSurface> {
    CatalogBrowser::new(
        ScriptedSource::new(replies),
        HeadlessSurface::new(StripLayout::default()),
    )
}

fn shown_alias(browser: &CatalogBrowser<ScriptedSource, HeadlessSurface>) -> Option<String> {
    browser
        .surface()
        .detail()
        .and_then(DetailPanel::as_item)
        .map(|d| d.alias.clone())
}

#[tokio::test]
async fn two_items_then_click_moves_selection() {
    let mut browser = browser([Reply::Items(vec![item("A", "Recon"), item("B", "Support")])]);

    assert!(matches!(browser.load().await, LoadOutcome::Loaded { count: 2 }));
    assert_eq!(browser.controller().catalog().len(), 2);
    assert_eq!(browser.controller().current(), Some(0));
    assert_eq!(browser.surface().active_indices(), vec![0]);
    assert_eq!(shown_alias(&browser).as_deref(), Some("A"));
    let text = browser.surface().detail().unwrap().text();
    assert!(text.contains("Class: Recon"));

    browser.on_thumbnail_activated(1);

    assert_eq!(browser.controller().current(), Some(1));
    assert!(!browser.surface().is_active(0));
    assert!(browser.surface().is_active(1));
    let text = browser.surface().detail().unwrap().text();
    assert!(text.contains("Class: Support"));
    assert!(!text.contains("Recon"), "no fields from A survive: {text}");
}

#[tokio::test]
async fn empty_catalog_has_no_selection() {
    let mut browser = browser([Reply::Items(Vec::new())]);

    assert!(matches!(browser.load().await, LoadOutcome::Empty));
    assert_eq!(browser.controller().current(), None);
    assert!(browser.surface().tiles().is_empty());
    assert!(browser.surface().detail().is_none());
    assert_eq!(browser.surface().strip_renders(), 1);

    browser.on_directional_step(Direction::Right);
    browser.on_thumbnail_activated(0);
    assert_eq!(browser.controller().current(), None);
    assert!(browser.surface().detail().is_none());
}

#[tokio::test]
async fn failed_first_load_shows_error_only() {
    let mut browser = browser([Reply::Refused]);

    assert!(browser.load().await.is_failed());
    let detail = browser.surface().detail().unwrap();
    assert!(detail.is_error());
    assert!(detail.text().contains("Error loading"));
    assert!(detail.text().contains("http://localhost:3000"));
    assert!(browser.surface().tiles().is_empty());
    assert_eq!(browser.surface().strip_renders(), 0);
    assert_eq!(browser.controller().current(), None);
}

#[tokio::test]
async fn failed_reload_keeps_previous_strip() {
    let mut browser = browser([
        Reply::Items(vec![item("A", "Recon"), item("B", "Support"), item("C", "Assault")]),
        Reply::Refused,
    ]);
    browser.load().await;
    browser.on_thumbnail_activated(2);
    let tiles_before = browser.surface().tiles().to_vec();

    assert!(browser.load().await.is_failed());

    assert_eq!(browser.surface().tiles(), tiles_before.as_slice());
    assert_eq!(browser.surface().strip_renders(), 1);
    assert_eq!(browser.surface().active_indices(), vec![2]);
    assert_eq!(browser.controller().catalog().len(), 3);
    assert!(browser.surface().detail().unwrap().is_error());

    // repeated failures keep overwriting the same message
    let first = browser.surface().detail().unwrap().clone();
    browser.load().await;
    assert_eq!(browser.surface().detail(), Some(&first));
}

#[tokio::test]
async fn repeated_load_matches_single_load() {
    let items = vec![item("A", "Recon"), item("B", "Support")];

    let mut once = browser([Reply::Items(items.clone())]);
    once.load().await;

    let mut twice = browser([Reply::Items(items.clone()), Reply::Items(items)]);
    twice.load().await;
    twice.load().await;

    assert_eq!(once.controller().catalog(), twice.controller().catalog());
    assert_eq!(once.controller().current(), twice.controller().current());
    assert_eq!(once.surface().tiles(), twice.surface().tiles());
    assert_eq!(once.surface().active_indices(), twice.surface().active_indices());
    assert_eq!(once.surface().detail(), twice.surface().detail());
}

#[tokio::test]
async fn reload_resets_selection_to_first() {
    let mut browser = browser([Reply::Items(vec![item("A", "Recon"), item("B", "Support")])]);
    browser.load().await;
    browser.on_directional_step(Direction::Right);
    assert_eq!(browser.controller().current(), Some(1));

    browser.load().await;
    assert_eq!(browser.controller().current(), Some(0));
    assert_eq!(browser.surface().active_indices(), vec![0]);
    assert_eq!(browser.surface().strip_renders(), 2);
}

#[tokio::test]
async fn arrows_wrap_around() {
    let mut browser = browser([Reply::Items(vec![item("A", "x"), item("B", "y"), item("C", "z")])]);
    browser.load().await;

    browser.on_directional_step(Direction::Left);
    assert_eq!(browser.controller().current(), Some(2));
    assert_eq!(shown_alias(&browser).as_deref(), Some("C"));

    browser.on_directional_step(Direction::Right);
    assert_eq!(browser.controller().current(), Some(0));
}

#[tokio::test]
async fn centering_tracks_container_resize() {
    let items = (0..20).map(|i| item(&format!("I{i}"), "x")).collect();
    let mut browser = browser([Reply::Items(items)]);
    browser.load().await;

    // tile 10: left 1100, center 1150
    browser.on_thumbnail_activated(10);
    assert_eq!(browser.surface().scroll_target(), Some(900.0));
    browser.surface_mut().settle();

    browser.surface_mut().set_container_width(300.0);
    browser.controller_mut().recenter();
    assert_eq!(browser.surface().scroll_target(), Some(1000.0));
}
