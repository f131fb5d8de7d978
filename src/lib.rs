//! Tag Style Tracking
//!
//! Client-side tag naming style tracking for editor tooling integrations.
//!
//! Keeps one resolved tag naming style per open document and mirrors the
//! active document's style into a status indicator, asking a remote
//! language-analysis service to detect the style when neither the cache
//! nor configuration can answer.
//!
//! This library provides:
//! - The per-document style state machine and cache
//! - The tag style request shared with the language-analysis peer
//! - Narrow traits for the host editor's indicator and option picker
//! - Configuration management

pub mod cache;
pub mod config;
pub mod document;
pub mod lsp;
pub mod state;
pub mod style;
pub mod ui;

// Re-exports for clean public API
pub use cache::StyleCache;
pub use config::{Config, PreferredTagCase};
pub use document::Document;
pub use lsp::{GetTagStyleRequest, LspStyleResolver, StyleResolver};
pub use state::StyleState;
pub use style::TagStyle;
pub use ui::{StatusIndicator, StylePicker, TAG_STYLE_COMMAND};
