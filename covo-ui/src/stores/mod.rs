//! Store types for UI state management

pub mod widget;

pub use widget::*;
