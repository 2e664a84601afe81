//! covo - floating chat widget
//!
//! Mounts the launcher button and the collapsible chat panel on top of the
//! host page. Runs once at bundle load.

fn main() {
    dioxus::launch(covo_web::App);
}
