use roster_model::CatalogItem;

/// Items from one successful load, in the order the server returned them.
///
/// Never mutated after construction; a new load builds a new sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSequence {
    items: Vec<CatalogItem>,
}

impl CatalogSequence {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }
}

impl From<Vec<CatalogItem>> for CatalogSequence {
    fn from(items: Vec<CatalogItem>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_has_no_valid_index() {
        let seq = CatalogSequence::default();
        assert!(seq.is_empty());
        assert_eq!(seq.last_index(), None);
        assert!(!seq.contains_index(0));
    }

    #[test]
    fn preserves_source_order() {
        let seq = CatalogSequence::from(vec![
            CatalogItem::new("B", "b.png"),
            CatalogItem::new("A", "a.png"),
        ]);
        let aliases: Vec<_> = seq.iter().map(|i| i.alias.as_str()).collect();
        assert_eq!(aliases, vec!["B", "A"]);
        assert_eq!(seq.last_index(), Some(1));
        assert!(seq.contains_index(1));
        assert!(!seq.contains_index(2));
    }
}
