use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::values::{Color, Gradient};

/// The tab bar drawn above grouped windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GroupbarConfig {
    /// Enable groupbars.
    pub enabled: bool,

    /// Font used for groupbar titles.
    pub font_family: String,

    /// Font size of groupbar titles.
    pub font_size: i64,

    /// Render gradients.
    pub gradients: bool,

    /// Height of the groupbar.
    pub height: i64,

    /// Decoration priority of groupbars.
    pub priority: i64,

    /// Render window titles in the groupbar.
    pub render_titles: bool,

    /// Scrolling over the groupbar changes the active window.
    pub scrolling: bool,

    /// Title text color.
    pub text_color: Color,

    /// Active group color.
    #[serde(rename = "col.active")]
    pub col_active: Gradient,

    /// Inactive group color.
    #[serde(rename = "col.inactive")]
    pub col_inactive: Gradient,

    /// Active locked group color.
    #[serde(rename = "col.locked_active")]
    pub col_locked_active: Gradient,

    /// Inactive locked group color.
    #[serde(rename = "col.locked_inactive")]
    pub col_locked_inactive: Gradient,
}

impl Default for GroupbarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            font_family: "Sans".to_string(),
            font_size: 8,
            gradients: true,
            height: 14,
            priority: 3,
            render_titles: true,
            scrolling: true,
            text_color: Color::from_argb(0xffffffff),
            col_active: Gradient::from_argb(0x66ffff00),
            col_inactive: Gradient::from_argb(0x66777700),
            col_locked_active: Gradient::from_argb(0x66ff5500),
            col_locked_inactive: Gradient::from_argb(0x66775500),
        }
    }
}
