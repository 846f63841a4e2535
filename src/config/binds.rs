use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Keybind behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BindsConfig {
    /// Pass mouse events to applications after a keybind was triggered.
    pub pass_mouse_when_bound: bool,

    /// Milliseconds to wait after a scroll event before another can trigger a bind.
    pub scroll_event_delay: i64,

    /// Switching to the focused workspace goes back to the previous one.
    pub workspace_back_and_forth: bool,

    /// Workspaces remember their previous workspace, allowing cycles.
    pub allow_workspace_cycles: bool,

    /// Center the cursor on the workspace (0) or its last active window (1) when switching. [0/1]
    pub workspace_center_on: i64,

    /// Directional focus preference: 0 history, 1 longest shared edge. [0/1]
    pub focus_preferred_method: i64,

    /// Group move dispatchers ignore per-group locks.
    pub ignore_group_lock: bool,

    /// On a fullscreen window, movefocus cycles fullscreen windows.
    pub movefocus_cycles_fullscreen: bool,

    /// Applications cannot inhibit keybinds.
    pub disable_keybind_grabbing: bool,
}

impl Default for BindsConfig {
    fn default() -> Self {
        Self {
            pass_mouse_when_bound: false,
            scroll_event_delay: 300,
            workspace_back_and_forth: false,
            allow_workspace_cycles: false,
            workspace_center_on: 0,
            focus_preferred_method: 0,
            ignore_group_lock: false,
            movefocus_cycles_fullscreen: true,
            disable_keybind_grabbing: false,
        }
    }
}
