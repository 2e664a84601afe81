//! Launcher button view component
//!
//! The always-visible round control that opens and closes the chat panel.

use crate::components::icons::ChatBubbleIcon;
use crate::components::ACCENT_COLOR;
use crate::display_types::Corner;
use dioxus::prelude::*;

/// Launcher button view (pure, props-based)
#[component]
pub fn LauncherButtonView(
    /// Viewport corner the button is docked to
    corner: Corner,
    /// Whether the panel is currently open (drives the hover hint)
    is_open: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let hint = if is_open { "Close chat" } else { "Open chat" };
    let style = launcher_style(corner);

    rsx! {
        button {
            style: "{style}",
            title: "{hint}",
            onclick: move |evt| onclick.call(evt),
            ChatBubbleIcon {}
        }
    }
}

pub(crate) fn launcher_style(corner: Corner) -> String {
    format!(
        "position: fixed; {} width: 60px; height: 60px; border-radius: 50%; \
         background: {ACCENT_COLOR}; color: white; border: none; font-size: 26px; \
         cursor: pointer; z-index: 9999; display: flex; align-items: center; \
         justify-content: center; box-shadow: 0 4px 15px rgba(0,0,0,0.3);",
        corner.launcher_position()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_is_fixed_and_always_on_top() {
        let style = launcher_style(Corner::BottomRight);
        assert!(style.starts_with("position: fixed;"));
        assert!(style.contains("z-index: 9999;"));
    }

    #[test]
    fn launcher_docks_to_the_configured_corner() {
        assert!(launcher_style(Corner::BottomLeft).contains("left: 20px;"));
        assert!(launcher_style(Corner::BottomRight).contains("right: 20px;"));
    }
}
