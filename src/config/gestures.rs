use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Touchpad and touchscreen workspace swipe gestures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GesturesConfig {
    /// Enable the touchpad workspace swipe gesture.
    pub workspace_swipe: bool,

    /// Number of fingers for the swipe.
    pub workspace_swipe_fingers: i64,

    /// Swipe distance, in px.
    pub workspace_swipe_distance: i64,

    /// Enable swiping from the edge of a touchscreen.
    pub workspace_swipe_touch: bool,

    /// Invert the swipe direction.
    pub workspace_swipe_invert: bool,

    /// Minimum speed in px per timepoint that forces the switch. 0 disables.
    pub workspace_swipe_min_speed_to_force: i64,

    /// Fraction of the distance a swipe must cover to switch. [0.0 - 1.0]
    pub workspace_swipe_cancel_ratio: f32,

    /// Swiping right on the last workspace creates a new one.
    pub workspace_swipe_create_new: bool,

    /// Lock the direction after swiping past the lock threshold (touchpad only).
    pub workspace_swipe_direction_lock: bool,

    /// Distance before the direction lock engages, in px (touchpad only).
    pub workspace_swipe_direction_lock_threshold: i64,

    /// Keep swiping past the neighboring workspaces.
    pub workspace_swipe_forever: bool,

    /// Use the `r` prefix instead of `m` when finding workspaces.
    pub workspace_swipe_use_r: bool,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        Self {
            workspace_swipe: false,
            workspace_swipe_fingers: 3,
            workspace_swipe_distance: 300,
            workspace_swipe_touch: false,
            workspace_swipe_invert: true,
            workspace_swipe_min_speed_to_force: 30,
            workspace_swipe_cancel_ratio: 0.5,
            workspace_swipe_create_new: true,
            workspace_swipe_direction_lock: true,
            workspace_swipe_direction_lock_threshold: 10,
            workspace_swipe_forever: false,
            workspace_swipe_use_r: false,
        }
    }
}
