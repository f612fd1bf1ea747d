//! Pure projections of catalog state onto the two visual regions.
//!
//! Both projections produce a complete replacement for their region; hosts
//! never patch individual fields, so nothing from a previous item survives
//! into the next render.

use roster_model::CatalogItem;

use crate::catalog::CatalogSequence;

/// Shown for any descriptive field the store left empty.
pub const MISSING_FIELD: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub index: usize,
    pub alias: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThumbnailStrip {
    pub tiles: Vec<Thumbnail>,
}

impl ThumbnailStrip {
    pub fn project(catalog: &CatalogSequence) -> Self {
        let tiles = catalog
            .iter()
            .enumerate()
            .map(|(index, item)| Thumbnail {
                index,
                alias: item.alias.clone(),
                image: item.image.clone(),
            })
            .collect();
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub label: &'static str,
    pub name: String,
    /// Reference text printed under the ability, when the slot has one.
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    pub alias: String,
    pub real_name: String,
    pub image: String,
    pub quote: String,
    pub facts: Vec<Fact>,
    pub abilities: Vec<Ability>,
    pub wiki: String,
}

impl ItemDetail {
    /// `Alias (Real Name)`
    pub fn heading(&self) -> String {
        format!("{} ({})", self.alias, self.real_name)
    }

    /// Flattened text of the whole panel, one entry per visual line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.heading(), format!("\"{}\"", self.quote)];
        lines.extend(
            self.facts
                .iter()
                .map(|fact| format!("{}: {}", fact.label, fact.value)),
        );
        for ability in &self.abilities {
            lines.push(format!("{}: {}", ability.label, ability.name));
            if let Some(reference) = &ability.reference {
                lines.push(reference.clone());
            }
        }
        lines.push(self.wiki.clone());
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPanel {
    Item(ItemDetail),
    /// Rendered in the host's error style in place of any item.
    Error(String),
}

impl DetailPanel {
    pub fn project(item: &CatalogItem) -> Self {
        fn text(value: &Option<String>) -> String {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(MISSING_FIELD)
                .to_string()
        }

        DetailPanel::Item(ItemDetail {
            alias: item.alias.clone(),
            real_name: text(&item.real_name),
            image: item.image.clone(),
            quote: text(&item.quote),
            facts: vec![
                Fact {
                    label: "Class",
                    value: text(&item.class),
                },
                Fact {
                    label: "Home World",
                    value: text(&item.home_world),
                },
                Fact {
                    label: "Age",
                    value: text(&item.age),
                },
            ],
            abilities: vec![
                Ability {
                    label: "Class Passive",
                    name: text(&item.class_passive),
                    reference: None,
                },
                Ability {
                    label: "Tactical",
                    name: text(&item.tactical),
                    reference: Some(text(&item.tactical_wiki)),
                },
                Ability {
                    label: "Passive",
                    name: text(&item.passive),
                    reference: Some(text(&item.passive_wiki)),
                },
                Ability {
                    label: "Ultimate",
                    name: text(&item.ultimate),
                    reference: Some(text(&item.ultimate_wiki)),
                },
            ],
            wiki: text(&item.wiki),
        })
    }

    pub fn error(message: impl Into<String>) -> Self {
        DetailPanel::Error(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DetailPanel::Error(_))
    }

    pub fn as_item(&self) -> Option<&ItemDetail> {
        match self {
            DetailPanel::Item(detail) => Some(detail),
            DetailPanel::Error(_) => None,
        }
    }

    /// Plain text of the panel, lines joined with newlines.
    pub fn text(&self) -> String {
        match self {
            DetailPanel::Item(detail) => detail.lines().join("\n"),
            DetailPanel::Error(message) => message.clone(),
        }
    }
}
