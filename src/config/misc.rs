use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::values::Color;

/// Miscellaneous behavior: splash, wallpaper, VRR, DPMS, swallowing and cursor tweaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MiscConfig {
    /// Disable the random logo background.
    pub disable_hyprland_logo: bool,

    /// Disable splash text rendering. Takes effect after a monitor reload.
    pub disable_splash_rendering: bool,

    /// Splash text color. Takes effect after a monitor reload.
    #[serde(rename = "col.splash")]
    pub col_splash: Color,

    /// Font used for the splash text. Takes effect after a monitor reload.
    pub splash_font_family: String,

    /// Force one of the default wallpapers; -1 picks at random. [-1/0/1/2]
    pub force_default_wallpaper: i64,

    /// Variable frame rate. Strongly recommended to keep on.
    pub vfr: bool,

    /// Adaptive sync: 0 off, 1 on, 2 fullscreen only. [0/1/2]
    pub vrr: i64,

    /// Wake monitors from DPMS off on mouse movement.
    pub mouse_move_enables_dpms: bool,

    /// Wake monitors from DPMS off on key press.
    pub key_press_enables_dpms: bool,

    /// Mouse focus follows the cursor while dragging and dropping.
    pub always_follow_on_dnd: bool,

    /// Keyboard-interactive layers keep focus when the mouse moves.
    pub layers_hog_keyboard_focus: bool,

    /// Animate manual window resizes and moves.
    pub animate_manual_resizes: bool,

    /// Animate windows dragged with the mouse.
    pub animate_mouse_windowdragging: bool,

    /// Do not reload the configuration automatically on save.
    pub disable_autoreload: bool,

    /// Enable window swallowing.
    pub enable_swallow: bool,

    /// Class regex of windows that can be swallowed, usually terminals.
    pub swallow_regex: String,

    /// Title regex of windows that are never swallowed.
    pub swallow_exception_regex: String,

    /// Focus applications that request activation.
    pub focus_on_activate: bool,

    /// Disable direct scanout.
    pub no_direct_scanout: bool,

    /// Hide the cursor after touch input until the mouse is used.
    pub hide_cursor_on_touch: bool,

    /// Hide the cursor on key press until the mouse moves.
    pub hide_cursor_on_key_press: bool,

    /// Moving the mouse into another monitor focuses it.
    pub mouse_move_focuses_monitor: bool,

    /// Suppress warnings about incompatible portal implementations.
    pub suppress_portal_warnings: bool,

    /// Start rendering ahead of the monitor frame to lower latency. Buggy.
    pub render_ahead_of_time: bool,

    /// Safezone for rendering ahead of time, in ms.
    pub render_ahead_safezone: i64,

    /// Zoom factor around the cursor. Minimum 1.0 (no zoom).
    pub cursor_zoom_factor: f32,

    /// Keep the cursor rigidly centered while zoomed.
    pub cursor_zoom_rigid: bool,

    /// Allow restarting a crashed lockscreen application.
    pub allow_session_lock_restore: bool,

    /// Background color, shown when the logo is disabled.
    pub background_color: Color,

    /// Close the special workspace when its last window is removed.
    pub close_special_on_empty: bool,

    /// A new tiled window over a fullscreen one: 0 behind, 1 takes over, 2 unfullscreens. [0/1/2]
    pub new_window_takes_over_fullscreen: i64,

    /// Enable hyprcursor support.
    pub enable_hyprcursor: bool,

    /// Open windows on the workspace they were invoked on: 0 off, 1 single-shot, 2 persistent. [0/1/2]
    pub initial_workspace_tracking: i64,
}

impl Default for MiscConfig {
    fn default() -> Self {
        Self {
            disable_hyprland_logo: false,
            disable_splash_rendering: false,
            col_splash: Color::from_argb(0xffffffff),
            splash_font_family: "Sans".to_string(),
            force_default_wallpaper: -1,
            vfr: true,
            vrr: 0,
            mouse_move_enables_dpms: false,
            key_press_enables_dpms: false,
            always_follow_on_dnd: true,
            layers_hog_keyboard_focus: true,
            animate_manual_resizes: false,
            animate_mouse_windowdragging: false,
            disable_autoreload: false,
            enable_swallow: false,
            swallow_regex: String::new(),
            swallow_exception_regex: String::new(),
            focus_on_activate: false,
            no_direct_scanout: true,
            hide_cursor_on_touch: true,
            hide_cursor_on_key_press: false,
            mouse_move_focuses_monitor: true,
            suppress_portal_warnings: false,
            render_ahead_of_time: false,
            render_ahead_safezone: 1,
            cursor_zoom_factor: 1.0,
            cursor_zoom_rigid: false,
            allow_session_lock_restore: false,
            background_color: Color::from_argb(0xff111111),
            close_special_on_empty: true,
            new_window_takes_over_fullscreen: 0,
            enable_hyprcursor: true,
            initial_workspace_tracking: 1,
        }
    }
}
