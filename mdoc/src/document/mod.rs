use std::collections::BTreeMap;

use crate::block::Block;

/// A parsed Markdown document: top-level blocks plus link reference
/// definitions (`[key]: url "title"`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
    /// Keyed by normalized label, see [`normalize_link_key`].
    pub links: BTreeMap<String, Link>,
}

/// The target of a link reference definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub url: String,
    pub title: String,
}

impl Document {
    pub fn empty() -> Self {
        Document::default()
    }

    pub fn last_block(&self) -> Option<&Block> {
        self.blocks.last()
    }
}

/// Normalize a link label the way CommonMark matches them: surrounding
/// whitespace stripped, interior whitespace collapsed, case folded.
pub fn normalize_link_key(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
