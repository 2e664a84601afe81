//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit the surrounding text
//! color. The widget carries its styling inline, so size is a pixel prop
//! rather than a class.

use dioxus::prelude::*;

/// Chat bubble icon (message circle)
#[component]
pub fn ChatBubbleIcon(#[props(default = 26)] size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
        }
    }
}

/// X (close) icon
#[component]
pub fn XIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}
