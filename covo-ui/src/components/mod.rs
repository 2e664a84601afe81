//! Shared UI components

pub mod icons;
pub mod launcher;
pub mod panel;

pub use icons::{ChatBubbleIcon, XIcon};
pub use launcher::LauncherButtonView;
pub use panel::ChatPanelView;

/// Widget accent color, used by the launcher and the panel header.
pub(crate) const ACCENT_COLOR: &str = "#4c1d95";
