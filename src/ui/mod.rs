//! Editor UI surfaces consumed by the style state.

pub mod indicator;
pub mod picker;

pub use indicator::{StatusIndicator, TAG_STYLE_COMMAND};
pub use picker::{StyleChoice, StylePicker, style_menu};
