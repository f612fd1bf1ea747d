use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum_test::TestServer;
use roster_model::CatalogItem;
use roster_server::{
    AppState,
    catalog::{CatalogError, CatalogRepository},
    create_app,
    infra::config::Config,
};

/// In-memory catalog that can be switched into a failing store.
// Code is used by test modules, but not in this scope
#[allow(unused)]
#[derive(Debug, Default)]
pub struct FixtureCatalog {
    items: Vec<CatalogItem>,
    failing: bool,
    queries: AtomicUsize,
}

#[allow(unused)]
impl FixtureCatalog {
    pub fn with_items(items: Vec<CatalogItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogRepository for FixtureCatalog {
    async fn list_items(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(CatalogError::Unavailable(
                "connection refused".into(),
            ));
        }
        Ok(self.items.clone())
    }

    async fn ping(&self) -> Result<(), CatalogError> {
        if self.failing {
            return Err(CatalogError::Unavailable(
                "connection refused".into(),
            ));
        }
        Ok(())
    }
}

#[allow(unused)]
pub fn sample_item(alias: &str) -> CatalogItem {
    CatalogItem {
        real_name: Some(format!("{alias} Real Name")),
        quote: Some(format!("{alias} says hello")),
        class: Some("Recon".into()),
        home_world: Some("Talos".into()),
        age: Some("30".into()),
        class_passive: Some("Scan beacons".into()),
        tactical: Some(format!("{alias} Tactical")),
        tactical_wiki: Some("Tactical notes".into()),
        passive: Some(format!("{alias} Passive")),
        passive_wiki: Some("Passive notes".into()),
        ultimate: Some(format!("{alias} Ultimate")),
        ultimate_wiki: Some("Ultimate notes".into()),
        wiki: Some(format!("https://wiki.example/{alias}")),
        ..CatalogItem::new(alias, format!("https://img.example/{alias}.png"))
    }
}

#[allow(unused)]
pub fn build_test_server(catalog: Arc<FixtureCatalog>) -> TestServer {
    let config =
        Config::for_database("postgresql://roster@localhost:5432/roster_test");
    build_test_server_with_config(catalog, config)
}

#[allow(unused)]
pub fn build_test_server_with_config(
    catalog: Arc<FixtureCatalog>,
    config: Config,
) -> TestServer {
    let state = AppState::new(catalog, Arc::new(config));
    TestServer::new(create_app(state)).expect("test server should build")
}
