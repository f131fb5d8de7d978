//! The tag naming style value and its display form.

use serde::{Deserialize, Serialize};

/// Resolved tag naming style for a document.
///
/// `Unsure` is a deferred-resolution placeholder: it can sit in the cache,
/// but it is never the final answer to a style query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagStyle {
    Both,
    KebabCase,
    PascalCase,
    Unsure,
}

impl TagStyle {
    /// Status indicator label for this style.
    pub fn status_label(self) -> &'static str {
        match self {
            TagStyle::Both => "<BOTH>",
            TagStyle::KebabCase => "<kebab-case>",
            TagStyle::PascalCase => "<PascalCase>",
            TagStyle::Unsure => "<UNSURE>",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_camel_case_names() {
        assert_eq!(serde_json::to_string(&TagStyle::Both).unwrap(), "\"both\"");
        assert_eq!(
            serde_json::to_string(&TagStyle::KebabCase).unwrap(),
            "\"kebabCase\""
        );
        assert_eq!(
            serde_json::to_string(&TagStyle::PascalCase).unwrap(),
            "\"pascalCase\""
        );
        assert_eq!(
            serde_json::to_string(&TagStyle::Unsure).unwrap(),
            "\"unsure\""
        );

        let style: TagStyle = serde_json::from_str("\"kebabCase\"").unwrap();
        assert_eq!(style, TagStyle::KebabCase);
    }

    #[test]
    fn status_labels() {
        assert_eq!(TagStyle::Both.status_label(), "<BOTH>");
        assert_eq!(TagStyle::KebabCase.status_label(), "<kebab-case>");
        assert_eq!(TagStyle::PascalCase.status_label(), "<PascalCase>");
        assert_eq!(TagStyle::Unsure.status_label(), "<UNSURE>");
    }
}
