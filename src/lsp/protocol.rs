//! The custom request shared with the language-analysis peer.

use tower_lsp::lsp_types::TextDocumentIdentifier;
use tower_lsp::lsp_types::request::Request;

use crate::style::TagStyle;

/// Tag style query, used in both directions: the peer asks this client for
/// its per-document preference, and the client asks the peer to detect the
/// style from document content.
pub enum GetTagStyleRequest {}

impl Request for GetTagStyleRequest {
    type Params = TextDocumentIdentifier;
    type Result = TagStyle;
    const METHOD: &'static str = "tagStyle/get";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tower_lsp::lsp_types::Url;

    #[test]
    fn params_shape_matches_the_wire() {
        let params = TextDocumentIdentifier {
            uri: Url::parse("file:///app.vue").unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "uri": "file:///app.vue" })
        );
        assert_eq!(GetTagStyleRequest::METHOD, "tagStyle/get");
    }
}
