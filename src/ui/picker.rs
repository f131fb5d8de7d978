//! The pick-one-of-N helper surface and the override menu contents.

use crate::style::TagStyle;

/// Asynchronous labeled-option picker provided by the host editor.
///
/// Returns the selected index, or `None` when the user dismissed the menu
/// without choosing. Dismissal is not the same as selecting index 0.
#[tower_lsp::async_trait]
pub trait StylePicker: Send + Sync {
    async fn pick(&self, options: Vec<String>) -> Option<usize>;
}

/// Choices offered by the override menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChoice {
    Both,
    KebabCase,
    PascalCase,
    Detect,
}

impl StyleChoice {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(StyleChoice::Both),
            1 => Some(StyleChoice::KebabCase),
            2 => Some(StyleChoice::PascalCase),
            3 => Some(StyleChoice::Detect),
            _ => None,
        }
    }
}

/// Build the override menu, marking the entry equal to the current cached
/// value as the active selection.
pub fn style_menu(current: Option<TagStyle>) -> Vec<String> {
    let marker = |style| if current == Some(style) { "• " } else { "" };
    vec![
        format!(
            "{}Component Using kebab-case and PascalCase (Both)",
            marker(TagStyle::Both)
        ),
        format!("{}Component Using kebab-case", marker(TagStyle::KebabCase)),
        format!("{}Component Using PascalCase", marker(TagStyle::PascalCase)),
        "Detect Component name from Content".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_has_four_entries_in_choice_order() {
        let menu = style_menu(None);
        assert_eq!(menu.len(), 4);
        assert_eq!(menu[0], "Component Using kebab-case and PascalCase (Both)");
        assert_eq!(menu[1], "Component Using kebab-case");
        assert_eq!(menu[2], "Component Using PascalCase");
        assert_eq!(menu[3], "Detect Component name from Content");
    }

    #[test]
    fn current_value_is_marked() {
        let menu = style_menu(Some(TagStyle::KebabCase));
        assert!(!menu[0].starts_with("• "));
        assert!(menu[1].starts_with("• "));
        assert!(!menu[2].starts_with("• "));
    }

    #[test]
    fn unsure_marks_nothing() {
        for entry in style_menu(Some(TagStyle::Unsure)) {
            assert!(!entry.starts_with("• "));
        }
    }

    #[test]
    fn indices_map_to_choices() {
        assert_eq!(StyleChoice::from_index(0), Some(StyleChoice::Both));
        assert_eq!(StyleChoice::from_index(1), Some(StyleChoice::KebabCase));
        assert_eq!(StyleChoice::from_index(2), Some(StyleChoice::PascalCase));
        assert_eq!(StyleChoice::from_index(3), Some(StyleChoice::Detect));
        assert_eq!(StyleChoice::from_index(4), None);
    }
}
