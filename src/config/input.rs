use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Keyboard, pointer and focus settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InputConfig {
    /// XKB keymap model.
    pub kb_model: String,

    /// XKB keymap layout.
    pub kb_layout: String,

    /// XKB keymap variant.
    pub kb_variant: String,

    /// XKB keymap options.
    pub kb_options: String,

    /// XKB keymap rules.
    pub kb_rules: String,

    /// Path to a custom .xkb file.
    pub kb_file: String,

    /// Engage numlock by default.
    pub numlock_by_default: bool,

    /// With multiple layouts, activate symbol keybinds by the symbol typed in the current layout.
    pub resolve_binds_by_sym: bool,

    /// Repeat rate for held-down keys, in repeats per second.
    pub repeat_rate: i64,

    /// Delay before a held-down key repeats, in milliseconds.
    pub repeat_delay: i64,

    /// Pointer sensitivity. [-1.0 - 1.0]
    pub sensitivity: f32,

    /// Pointer acceleration profile: adaptive, flat or custom. Empty uses the libinput default.
    pub accel_profile: String,

    /// Force no pointer acceleration.
    pub force_no_accel: bool,

    /// Swap the left and right mouse buttons.
    pub left_handed: bool,

    /// Custom scroll acceleration in the form `<step> <points>`. Only used with a custom accel_profile.
    pub scroll_points: String,

    /// Scroll method: 2fg, edge, on_button_down or no_scroll. Empty uses the libinput default.
    pub scroll_method: String,

    /// Scroll button id. 0 uses the default.
    pub scroll_button: i64,

    /// Pressing the scroll button toggles it instead of requiring it to be held.
    pub scroll_button_lock: bool,

    /// Scroll movement multiplier for external mice.
    pub scroll_factor: f32,

    /// Invert the scrolling direction.
    pub natural_scroll: bool,

    /// How cursor movement affects window focus. [0/1/2/3]
    pub follow_mouse: i64,

    /// Only refocus on hover when crossing a window boundary, with follow_mouse=1.
    pub mouse_refocus: bool,

    /// Change focus to the window under the cursor when switching between tiled and floating. [0/1/2]
    pub float_switch_override_focus: i64,

    /// Only floating windows in a special workspace do not block focusing the regular workspace.
    pub special_fallthrough: bool,

    /// Handling of axis events around a focused window. [0/1/2/3]
    pub off_window_axis_events: i64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            kb_model: String::new(),
            kb_layout: "us".to_string(),
            kb_variant: String::new(),
            kb_options: String::new(),
            kb_rules: String::new(),
            kb_file: String::new(),
            numlock_by_default: false,
            resolve_binds_by_sym: false,
            repeat_rate: 25,
            repeat_delay: 600,
            sensitivity: 0.0,
            accel_profile: String::new(),
            force_no_accel: false,
            left_handed: false,
            scroll_points: String::new(),
            scroll_method: String::new(),
            scroll_button: 0,
            scroll_button_lock: false,
            scroll_factor: 1.0,
            natural_scroll: false,
            follow_mouse: 1,
            mouse_refocus: true,
            float_switch_override_focus: 1,
            special_fallthrough: false,
            off_window_axis_events: 1,
        }
    }
}
