mod blur;

pub use blur::BlurConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::values::{Color, Vec2};

/// Window decoration settings: rounding, opacity, shadows, dimming and blur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DecorationConfig {
    /// Rounded corner radius, in layout px.
    pub rounding: i64,

    /// Opacity of active windows. [0.0 - 1.0]
    pub active_opacity: f32,

    /// Opacity of inactive windows. [0.0 - 1.0]
    pub inactive_opacity: f32,

    /// Opacity of fullscreen windows. [0.0 - 1.0]
    pub fullscreen_opacity: f32,

    /// Enable drop shadows on windows.
    pub drop_shadow: bool,

    /// Shadow range ("size"), in layout px.
    pub shadow_range: i64,

    /// Power of the shadow falloff; higher falls off faster. [1 - 4]
    pub shadow_render_power: i64,

    /// Only render the shadow around the window, not behind it.
    pub shadow_ignore_window: bool,

    /// Shadow color. Alpha sets the shadow opacity.
    #[serde(rename = "col.shadow")]
    pub col_shadow: Color,

    /// Shadow color for inactive windows.
    #[serde(rename = "col.shadow_inactive")]
    pub col_shadow_inactive: Color,

    /// Shadow rendering offset.
    pub shadow_offset: Vec2,

    /// Shadow scale. [0.0 - 1.0]
    pub shadow_scale: f32,

    /// Dim inactive windows.
    pub dim_inactive: bool,

    /// How much inactive windows are dimmed. [0.0 - 1.0]
    pub dim_strength: f32,

    /// How much the rest of the screen is dimmed while a special workspace is open. [0.0 - 1.0]
    pub dim_special: f32,

    /// How much the dimaround window rule dims. [0.0 - 1.0]
    pub dim_around: f32,

    /// Path to a custom shader applied at the end of rendering.
    pub screen_shader: String,

    /// Background blur settings.
    pub blur: BlurConfig,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            rounding: 0,
            active_opacity: 1.0,
            inactive_opacity: 1.0,
            fullscreen_opacity: 1.0,
            drop_shadow: true,
            shadow_range: 4,
            shadow_render_power: 3,
            shadow_ignore_window: true,
            col_shadow: Color::from_argb(0xee1a1a1a),
            col_shadow_inactive: Color::from_argb(0xee1a1a1a),
            shadow_offset: Vec2::default(),
            shadow_scale: 1.0,
            dim_inactive: false,
            dim_strength: 0.5,
            dim_special: 0.2,
            dim_around: 0.4,
            screen_shader: String::new(),
            blur: BlurConfig::default(),
        }
    }
}
