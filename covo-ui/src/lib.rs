//! covo-ui - Shared UI types and components for covo
//!
//! Contains display types, the widget state store, and the pure view
//! components rendered by the web widget.

pub mod components;
pub mod display_types;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
