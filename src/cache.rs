//! Client-side cache of resolved tag styles, keyed by document uri.

use std::collections::HashMap;

use tower_lsp::lsp_types::Url;

use crate::style::TagStyle;

/// In-memory map from document uri to its resolved tag style.
///
/// Keys are exact (case-sensitive); callers normalize where needed. An
/// absent key means the document was never touched, which is distinct from
/// a stored [`TagStyle::Unsure`] (resolution deferred).
#[derive(Debug, Default)]
pub struct StyleCache {
    entries: HashMap<Url, TagStyle>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, uri: &Url) -> Option<TagStyle> {
        self.entries.get(uri).copied()
    }

    pub fn set(&mut self, uri: Url, style: TagStyle) {
        self.entries.insert(uri, style);
    }

    /// Drop the entry for a closed document.
    pub fn remove(&mut self, uri: &Url) {
        self.entries.remove(uri);
    }
}
