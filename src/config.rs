//! Configuration management for the tag style feature.
//!
//! Handles:
//! - The preferred tag case setting (`both` | `kebab` | `pascal`)
//! - The language id the feature applies to

use serde::{Deserialize, Deserializer};

use crate::document::Document;
use crate::style::TagStyle;

/// Value of the preferred tag case setting.
///
/// Anything other than the three recognized values means "no default": the
/// style is always detected from document content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreferredTagCase {
    Both,
    Kebab,
    Pascal,
    #[default]
    Auto,
}

impl PreferredTagCase {
    /// Parse the raw setting value; unrecognized input means `Auto`.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "both" => PreferredTagCase::Both,
            "kebab" => PreferredTagCase::Kebab,
            "pascal" => PreferredTagCase::Pascal,
            _ => PreferredTagCase::Auto,
        }
    }

    /// The concrete style this setting names, if any.
    pub fn as_style(self) -> Option<TagStyle> {
        match self {
            PreferredTagCase::Both => Some(TagStyle::Both),
            PreferredTagCase::Kebab => Some(TagStyle::KebabCase),
            PreferredTagCase::Pascal => Some(TagStyle::PascalCase),
            PreferredTagCase::Auto => None,
        }
    }
}

impl<'de> Deserialize<'de> for PreferredTagCase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(PreferredTagCase::from_setting(&value))
    }
}

/// Combined configuration read from the host editor's settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Preferred tag case for documents seen for the first time
    pub preferred_tag_case: PreferredTagCase,
    /// Language id of the documents this feature applies to
    pub document_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            preferred_tag_case: PreferredTagCase::default(),
            document_language: "vue".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from the host editor's settings object.
    ///
    /// Unknown keys and malformed values fall back to defaults rather than
    /// failing activation.
    pub fn from_settings(settings: serde_json::Value) -> Self {
        serde_json::from_value(settings).unwrap_or_default()
    }

    /// Whether the feature applies to this document.
    pub fn is_relevant(&self, doc: &Document) -> bool {
        doc.language_id == self.document_language
    }
}
