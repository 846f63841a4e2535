mod groupbar;

pub use groupbar::GroupbarConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::values::Gradient;

/// Window group behavior and border colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GroupConfig {
    /// New windows in a group spawn after the current one instead of at the tail.
    pub insert_after_current: bool,

    /// Focus the window that was just moved out of the group.
    pub focus_removed_window: bool,

    /// Active group border color.
    #[serde(rename = "col.border_active")]
    pub col_border_active: Gradient,

    /// Inactive group border color.
    #[serde(rename = "col.border_inactive")]
    pub col_border_inactive: Gradient,

    /// Active locked group border color.
    #[serde(rename = "col.border_locked_active")]
    pub col_border_locked_active: Gradient,

    /// Inactive locked group border color.
    #[serde(rename = "col.border_locked_inactive")]
    pub col_border_locked_inactive: Gradient,

    /// Group tab bar settings.
    pub groupbar: GroupbarConfig,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            insert_after_current: true,
            focus_removed_window: true,
            col_border_active: Gradient::from_argb(0x66ffff00),
            col_border_inactive: Gradient::from_argb(0x66777700),
            col_border_locked_active: Gradient::from_argb(0x66ff5500),
            col_border_locked_inactive: Gradient::from_argb(0x66775500),
            groupbar: GroupbarConfig::default(),
        }
    }
}
