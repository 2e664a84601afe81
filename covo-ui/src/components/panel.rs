//! Chat panel view component
//!
//! Pure, props-based panel holding the header row and the embedded chatbot
//! frame. The panel stays in the tree in both states; visibility is expressed
//! through its display style, so the frame keeps its state across toggles and
//! exactly one frame reference exists after mount.

use crate::components::icons::XIcon;
use crate::components::ACCENT_COLOR;
use crate::display_types::Corner;
use dioxus::prelude::*;

/// Chat panel view (pure, props-based)
#[component]
pub fn ChatPanelView(
    /// Controls whether the panel is shown
    is_open: bool,
    /// Header title text
    title: String,
    /// URL of the embedded chatbot page
    chat_url: String,
    /// Viewport corner the panel is docked to
    corner: Corner,
    /// Called when the header is activated
    on_close: EventHandler<()>,
) -> Element {
    let panel = panel_style(corner, is_open);
    let header = header_style();

    rsx! {
        div {
            style: "{panel}",
            // The whole header row closes the panel, not just the X.
            div {
                style: "{header}",
                onclick: move |_| on_close.call(()),
                span { "{title}" }
                XIcon {}
            }
            iframe {
                src: "{chat_url}",
                style: "border: none; width: 100%; height: 100%;",
            }
        }
    }
}

pub(crate) fn panel_style(corner: Corner, is_open: bool) -> String {
    let display = if is_open { "flex" } else { "none" };
    format!(
        "position: fixed; {} width: 380px; height: 550px; background: white; \
         border-radius: 14px; display: {display}; flex-direction: column; \
         z-index: 9999; box-shadow: 0 8px 25px rgba(0,0,0,0.3); overflow: hidden;",
        corner.panel_position()
    )
}

pub(crate) fn header_style() -> String {
    format!(
        "background: {ACCENT_COLOR}; color: white; padding: 12px; font-weight: bold; \
         display: flex; justify-content: space-between; align-items: center; \
         cursor: pointer;"
    )
}
