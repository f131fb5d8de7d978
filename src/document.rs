//! Document identity as reported by the host editor.

use tower_lsp::lsp_types::Url;

/// An open document: its uri and the language id the editor assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub uri: Url,
    pub language_id: String,
}

impl Document {
    pub fn new(uri: Url, language_id: impl Into<String>) -> Self {
        Self {
            uri,
            language_id: language_id.into(),
        }
    }

    /// Uri comparison as used for matching against the active editor.
    ///
    /// Cache keys stay exact; only the active-editor match ignores case,
    /// since editor and peer may stringify the same location differently.
    pub fn matches_uri(&self, other: &Url) -> bool {
        self.uri.as_str().eq_ignore_ascii_case(other.as_str())
    }
}
