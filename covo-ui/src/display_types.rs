//! Display types shared between views
//!
//! Plain presentation data with no behavior beyond mapping to CSS.

use serde::Deserialize;

/// Viewport corner the widget docks to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Fixed-position offsets for the launcher button
    pub fn launcher_position(&self) -> &'static str {
        match self {
            Self::BottomRight => "bottom: 20px; right: 20px;",
            Self::BottomLeft => "bottom: 20px; left: 20px;",
        }
    }

    /// Fixed-position offsets for the panel, clearing the launcher below it
    pub fn panel_position(&self) -> &'static str {
        match self {
            Self::BottomRight => "bottom: 90px; right: 20px;",
            Self::BottomLeft => "bottom: 90px; left: 20px;",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_bottom_right() {
        assert_eq!(Corner::default(), Corner::BottomRight);
    }

    #[test]
    fn panel_sits_above_the_launcher() {
        for corner in [Corner::BottomRight, Corner::BottomLeft] {
            assert!(corner.launcher_position().contains("bottom: 20px"));
            assert!(corner.panel_position().contains("bottom: 90px"));
        }
    }

    #[test]
    fn horizontal_offset_follows_the_corner() {
        assert!(Corner::BottomRight.launcher_position().contains("right:"));
        assert!(Corner::BottomRight.panel_position().contains("right:"));
        assert!(Corner::BottomLeft.launcher_position().contains("left:"));
        assert!(Corner::BottomLeft.panel_position().contains("left:"));
    }

    #[test]
    fn deserializes_from_kebab_case() {
        let corner: Corner = serde_json::from_str("\"bottom-left\"").unwrap();
        assert_eq!(corner, Corner::BottomLeft);
    }
}
