//! Catalog rows as stored and as served.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One catalog entry: identity, display image, and its descriptive text.
///
/// Only `alias` and `image` are guaranteed; every descriptive column is
/// nullable in the store and may be absent from a payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CatalogItem {
    pub alias: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub real_name: Option<String>,
    pub image: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub quote: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub home_world: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub age: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class_passive: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tactical: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tactical_wiki: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub passive: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub passive_wiki: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ultimate: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ultimate_wiki: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub wiki: Option<String>,
}

impl CatalogItem {
    /// Column list in wire order, used by the store query.
    pub const COLUMNS: [&'static str; 15] = [
        "alias",
        "real_name",
        "image",
        "quote",
        "class",
        "home_world",
        "age",
        "class_passive",
        "tactical",
        "tactical_wiki",
        "passive",
        "passive_wiki",
        "ultimate",
        "ultimate_wiki",
        "wiki",
    ];

    pub fn new(alias: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            image: image.into(),
            ..Self::default()
        }
    }
}
