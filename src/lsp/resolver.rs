//! Outbound style detection against the language-analysis service.

use anyhow::Result;
use tower_lsp::Client;
use tower_lsp::lsp_types::{TextDocumentIdentifier, Url};

use crate::lsp::protocol::GetTagStyleRequest;
use crate::style::TagStyle;

/// Issues a style-detection query for a document.
///
/// A conforming resolver inspects document content and answers with one of
/// the three concrete styles, never [`TagStyle::Unsure`].
#[tower_lsp::async_trait]
pub trait StyleResolver: Send + Sync {
    async fn resolve(&self, uri: &Url) -> Result<TagStyle>;
}

/// Resolver backed by the language server connection.
pub struct LspStyleResolver {
    client: Client,
}

impl LspStyleResolver {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[tower_lsp::async_trait]
impl StyleResolver for LspStyleResolver {
    async fn resolve(&self, uri: &Url) -> Result<TagStyle> {
        let params = TextDocumentIdentifier { uri: uri.clone() };
        self.client
            .send_request::<GetTagStyleRequest>(params)
            .await
            .map_err(|err| anyhow::anyhow!("tag style detection failed for {uri}: {err}"))
    }
}
