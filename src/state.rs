//! Per-document tag style orchestration.
//!
//! [`StyleState`] reacts to focus changes, close events, the override
//! command and inbound style queries, keeping the cache and the status
//! indicator in agreement.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tower_lsp::lsp_types::{TextDocumentIdentifier, Url};

use crate::cache::StyleCache;
use crate::config::Config;
use crate::document::Document;
use crate::lsp::resolver::StyleResolver;
use crate::style::TagStyle;
use crate::ui::indicator::StatusIndicator;
use crate::ui::picker::{StyleChoice, StylePicker, style_menu};

/// Orchestrator for per-document tag styles.
///
/// Owns the cache; every mutation goes through these methods. The host
/// editor wires its events here:
/// - active-document changes -> [`Self::did_change_active_document`]
///   (called once at startup for the already-active document)
/// - document close -> [`Self::did_close_document`]
/// - the [`crate::ui::TAG_STYLE_COMMAND`] command -> [`Self::select_tag_style`]
/// - the peer's style query -> [`Self::handle_tag_style_request`]
pub struct StyleState {
    config: Config,
    resolver: Arc<dyn StyleResolver>,
    indicator: Arc<dyn StatusIndicator>,
    picker: Arc<dyn StylePicker>,
    cache: Mutex<StyleCache>,
    active: Mutex<Option<Document>>,
}

impl StyleState {
    pub fn new(
        config: Config,
        resolver: Arc<dyn StyleResolver>,
        indicator: Arc<dyn StatusIndicator>,
        picker: Arc<dyn StylePicker>,
    ) -> Self {
        Self {
            config,
            resolver,
            indicator,
            picker,
            cache: Mutex::new(StyleCache::new()),
            active: Mutex::new(None),
        }
    }

    /// The editor focused a different document, or none.
    pub async fn did_change_active_document(&self, doc: Option<Document>) -> Result<()> {
        *self.active.lock().await = doc.clone();
        match doc {
            Some(doc) => self.refresh_view(&doc).await,
            None => {
                self.indicator.hide();
                Ok(())
            }
        }
    }

    /// The editor closed a document; its cached style is dropped. The
    /// indicator is untouched (focus has already moved elsewhere).
    pub async fn did_close_document(&self, uri: &Url) {
        self.cache.lock().await.remove(uri);
    }

    /// The override command: let the user pick a style for the active
    /// document, or re-detect it from content.
    pub async fn select_tag_style(&self) -> Result<()> {
        let Some(doc) = self.active.lock().await.clone() else {
            return Ok(());
        };

        let current = self.cache.lock().await.get(&doc.uri);
        let Some(index) = self.picker.pick(style_menu(current)).await else {
            return Ok(()); // dismissed
        };

        match StyleChoice::from_index(index) {
            Some(StyleChoice::Both) => self.store(&doc.uri, TagStyle::Both).await,
            Some(StyleChoice::KebabCase) => self.store(&doc.uri, TagStyle::KebabCase).await,
            Some(StyleChoice::PascalCase) => self.store(&doc.uri, TagStyle::PascalCase).await,
            Some(StyleChoice::Detect) => {
                let detected = self.resolver.resolve(&doc.uri).await?;
                self.store(&doc.uri, detected).await;
            }
            None => {}
        }

        self.refresh_view(&doc).await
    }

    /// Inbound style query from the peer.
    ///
    /// A cached [`TagStyle::Unsure`] triggers a real detection before
    /// answering; a never-seen document answers [`TagStyle::Both`] without
    /// touching the cache.
    pub async fn handle_tag_style_request(
        &self,
        params: TextDocumentIdentifier,
    ) -> Result<TagStyle> {
        let cached = self.cache.lock().await.get(&params.uri);
        match cached {
            Some(TagStyle::Unsure) => {
                log::debug!("deferred tag style detection for {}", params.uri);
                let resolved = self.resolver.resolve(&params.uri).await?;
                self.store(&params.uri, resolved).await;
                if self.is_active(&params.uri).await {
                    self.indicator.set_style(resolved);
                }
                Ok(resolved)
            }
            Some(style) => Ok(style),
            None => Ok(TagStyle::Both),
        }
    }

    /// Read-only view of the cached style for a document.
    pub async fn cached_style(&self, uri: &Url) -> Option<TagStyle> {
        self.cache.lock().await.get(uri)
    }

    /// Resolve the style for a document (cache, then configured default,
    /// then content detection) and reflect the result in the indicator.
    async fn refresh_view(&self, doc: &Document) -> Result<()> {
        if !self.config.is_relevant(doc) {
            if self.is_active(&doc.uri).await {
                self.indicator.hide();
            }
            return Ok(());
        }

        let cached = self.cache.lock().await.get(&doc.uri);
        let style = match cached {
            Some(style) => style,
            None => match self.config.preferred_tag_case.as_style() {
                Some(style) => style,
                None => {
                    log::debug!("detecting tag style for {}", doc.uri);
                    self.resolver.resolve(&doc.uri).await?
                }
            },
        };

        // Written back even on a cache hit, so a later peer query finds an
        // answer without re-resolving.
        self.store(&doc.uri, style).await;

        // A resolve can outlive the focus that started it; only the
        // still-active document drives the indicator.
        if self.is_active(&doc.uri).await {
            self.indicator.set_style(style);
            self.indicator.show();
        }
        Ok(())
    }

    async fn store(&self, uri: &Url, style: TagStyle) {
        self.cache.lock().await.set(uri.clone(), style);
    }

    async fn is_active(&self, uri: &Url) -> bool {
        self.active
            .lock()
            .await
            .as_ref()
            .is_some_and(|doc| doc.matches_uri(uri))
    }
}
