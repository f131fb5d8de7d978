//! The status indicator surface provided by the host editor.

use crate::style::TagStyle;

/// Command id the host registers for the override menu; the same id is
/// bound as the indicator's click action.
pub const TAG_STYLE_COMMAND: &str = "tagStyle.select";

/// Single status element summarizing the active document's tag style.
///
/// Implementations render [`TagStyle::status_label`] however the host
/// toolkit displays status items. `show` and `hide` are idempotent.
pub trait StatusIndicator: Send + Sync {
    fn set_style(&self, style: TagStyle);
    fn show(&self);
    fn hide(&self);
}
