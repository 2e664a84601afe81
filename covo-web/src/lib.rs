//! covo-web - Web entry for the covo chat widget
//!
//! Resolves the widget configuration, owns the visibility state, and wires
//! the pure views from covo-ui.

pub mod config;

use covo_ui::stores::WidgetState;
use covo_ui::wasm_utils::DocumentKeyListener;
use covo_ui::{ChatPanelView, LauncherButtonView};
use dioxus::prelude::*;
use tracing::debug;

use crate::config::WidgetConfig;

/// Root widget component.
///
/// Renders exactly one launcher and one panel. Re-renders only flip the
/// panel's display mode, so repeated toggle/close sequences never create
/// duplicate elements.
#[component]
pub fn App() -> Element {
    let config = use_hook(WidgetConfig::resolve);
    let mut state = use_signal(WidgetState::default);

    // Escape closes the panel while it is open. The listener lives in a
    // signal and drops (detaching itself) whenever the panel closes.
    let mut escape_listener = use_signal(|| None::<DocumentKeyListener>);
    use_effect(move || {
        if !state.read().panel_open {
            escape_listener.set(None);
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        escape_listener.set(Some(DocumentKeyListener::new(document, "Escape", move || {
            state.write().close_panel();
        })));
    });

    rsx! {
        LauncherButtonView {
            corner: config.corner,
            is_open: state.read().panel_open,
            onclick: move |_| {
                state.write().toggle_panel();
                debug!(open = state.read().panel_open, "panel toggled");
            },
        }
        ChatPanelView {
            is_open: state.read().panel_open,
            title: config.title.clone(),
            chat_url: config.chat_url.clone(),
            corner: config.corner,
            on_close: move |_| {
                debug!("panel closed from header");
                state.write().close_panel();
            },
        }
    }
}
