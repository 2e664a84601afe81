//! Widget configuration
//!
//! The host page may define `window.__covo` with a JSON-shaped object before
//! the widget bundle loads:
//!
//! ```html
//! <script>window.__covo = { "title": "Support", "corner": "bottom-left" };</script>
//! ```
//!
//! Missing fields keep the defaults below. A malformed value is logged and
//! ignored so the widget always mounts.

use covo_ui::display_types::Corner;
use serde::Deserialize;
use tracing::{info, warn};

/// Default path of the companion chatbot page
pub const DEFAULT_CHAT_URL: &str = "/chatbot/chatbot.html";

/// Default panel header title
pub const DEFAULT_TITLE: &str = "Assistant";

/// Static widget configuration, resolved once at startup
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    /// URL loaded into the embedded frame
    pub chat_url: String,
    /// Panel header title
    pub title: String,
    /// Viewport corner the widget docks to
    pub corner: Corner,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chat_url: DEFAULT_CHAT_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            corner: Corner::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config payload is not valid JSON: {0}")]
    InvalidJson(String),
}

impl WidgetConfig {
    /// Parse a config payload. Fields not present keep their defaults;
    /// unknown fields are ignored.
    pub fn from_json_str(payload: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(payload).map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }

    /// Read `window.__covo`, falling back to the defaults when it is absent
    /// or malformed. Never fails the mount.
    pub fn resolve() -> Self {
        match read_host_global() {
            None => {
                info!("no host config, using defaults");
                Self::default()
            }
            Some(payload) => match Self::from_json_str(&payload) {
                Ok(config) => {
                    info!(chat_url = %config.chat_url, "loaded host config");
                    config
                }
                Err(err) => {
                    warn!("ignoring host config: {err}");
                    Self::default()
                }
            },
        }
    }
}

/// JSON-stringify `window.__covo` if the host page defined it.
fn read_host_global() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &"__covo".into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&value).ok()?.as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = WidgetConfig::from_json_str("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.chat_url, "/chatbot/chatbot.html");
        assert_eq!(config.title, "Assistant");
    }

    #[test]
    fn partial_payload_overrides_only_named_fields() {
        let config = WidgetConfig::from_json_str(r#"{"title": "Support"}"#).unwrap();
        assert_eq!(config.title, "Support");
        assert_eq!(config.chat_url, DEFAULT_CHAT_URL);
        assert_eq!(config.corner, Corner::BottomRight);
    }

    #[test]
    fn full_payload_overrides_everything() {
        let config = WidgetConfig::from_json_str(
            r#"{"chat_url": "/help/bot.html", "title": "Helpdesk", "corner": "bottom-left"}"#,
        )
        .unwrap();
        assert_eq!(config.chat_url, "/help/bot.html");
        assert_eq!(config.title, "Helpdesk");
        assert_eq!(config.corner, Corner::BottomLeft);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = WidgetConfig::from_json_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err = WidgetConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }
}
