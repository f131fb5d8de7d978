//! Protocol and resolver boundary shared with the language-analysis service.

pub mod protocol;
pub mod resolver;

pub use protocol::GetTagStyleRequest;
pub use resolver::{LspStyleResolver, StyleResolver};
