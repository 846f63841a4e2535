use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::values::{Gaps, Gradient};

/// General window management settings.
///
/// Covers borders, gaps, border colors, the tiling layout and basic cursor
/// behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GeneralConfig {
    /// Legacy mouse sensitivity. Independent of `input.sensitivity`; values other than 1 may misbehave.
    pub sensitivity: f32,

    /// Size of the border around windows, in layout px.
    pub border_size: i64,

    /// Disable borders for floating windows.
    pub no_border_on_floating: bool,

    /// Gaps between windows. Accepts CSS style shorthand (top, right, bottom, left).
    pub gaps_in: Gaps,

    /// Gaps between windows and monitor edges. Accepts CSS style shorthand (top, right, bottom, left).
    pub gaps_out: Gaps,

    /// Gaps between workspaces. Stacks with gaps_out.
    pub gaps_workspaces: i64,

    /// Border color for inactive windows.
    #[serde(rename = "col.inactive_border")]
    pub col_inactive_border: Gradient,

    /// Border color for the active window.
    #[serde(rename = "col.active_border")]
    pub col_active_border: Gradient,

    /// Inactive border color for windows that cannot be added to a group.
    #[serde(rename = "col.nogroup_border")]
    pub col_nogroup_border: Gradient,

    /// Active border color for windows that cannot be added to a group.
    #[serde(rename = "col.nogroup_border_active")]
    pub col_nogroup_border_active: Gradient,

    /// Seconds of cursor inactivity before hiding it. 0 never hides.
    pub cursor_inactive_timeout: i64,

    /// Tiling layout to use: dwindle or master.
    pub layout: String,

    /// Do not warp the cursor on focus changes, keybinds and similar.
    pub no_cursor_warps: bool,

    /// Do not fall back to the next window when moving focus in a direction with no window.
    pub no_focus_fallback: bool,

    /// Also apply the sensitivity to raw mouse output. Not recommended.
    pub apply_sens_to_raw: bool,

    /// Resize windows by dragging on borders and gaps.
    pub resize_on_border: bool,

    /// Extra grab area around borders, used when resize_on_border is on.
    pub extend_border_grab_area: i64,

    /// Show a cursor icon when hovering over borders, used when resize_on_border is on.
    pub hover_icon_on_border: bool,

    /// Master switch for allowing tearing.
    pub allow_tearing: bool,

    /// Corner floating windows are resized from: 1-4 clockwise from top left, 0 disables.
    pub resize_corner: i64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            sensitivity: 1.0,
            border_size: 1,
            no_border_on_floating: false,
            gaps_in: Gaps::uniform(5),
            gaps_out: Gaps::uniform(20),
            gaps_workspaces: 0,
            col_inactive_border: Gradient::from_argb(0xff444444),
            col_active_border: Gradient::from_argb(0xffffffff),
            col_nogroup_border: Gradient::from_argb(0xffffaaff),
            col_nogroup_border_active: Gradient::from_argb(0xffff00ff),
            cursor_inactive_timeout: 0,
            layout: "dwindle".to_string(),
            no_cursor_warps: false,
            no_focus_fallback: false,
            apply_sens_to_raw: false,
            resize_on_border: false,
            extend_border_grab_area: 15,
            hover_icon_on_border: true,
            allow_tearing: false,
            resize_corner: 0,
        }
    }
}
