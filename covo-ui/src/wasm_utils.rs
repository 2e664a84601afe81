//! WASM utilities for browser interop
//!
//! A keyboard listener attached through a `Closure` must outlive its
//! registration, and `closure.forget()` leaks the closure and leaves the
//! listener attached forever. `DocumentKeyListener` ties the listener
//! lifetime to Rust ownership instead: dropping the value detaches the
//! listener. With Dioxus signals, store it in a
//! `Signal<Option<DocumentKeyListener>>` and set it to `None` to detach.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A document `keydown` listener for a single named key that removes itself
/// when dropped.
pub struct DocumentKeyListener {
    document: web_sys::Document,
    callback: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl DocumentKeyListener {
    /// Attaches a `keydown` listener that fires `on_key` whenever `key`
    /// (compared against `KeyboardEvent::key`) is pressed.
    ///
    /// The listener is automatically removed when this struct is dropped.
    pub fn new(
        document: web_sys::Document,
        key: &'static str,
        mut on_key: impl FnMut() + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys::KeyboardEvent)> =
            Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
                if event.key() == key {
                    on_key();
                }
            }));

        document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok();

        Self { document, callback }
    }
}

impl Drop for DocumentKeyListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "keydown",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
