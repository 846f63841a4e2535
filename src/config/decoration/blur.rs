use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kawase background blur behind windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BlurConfig {
    /// Enable window background blur.
    pub enabled: bool,

    /// Blur size (distance).
    pub size: i64,

    /// Number of blur passes.
    pub passes: i64,

    /// Make the blur layer ignore the window's opacity.
    pub ignore_opacity: bool,

    /// Enable further blur optimizations. Strongly recommended.
    pub new_optimizations: bool,

    /// Floating windows ignore tiled windows in their blur. Requires new_optimizations.
    pub xray: bool,

    /// Amount of noise applied. [0.0 - 1.0]
    pub noise: f32,

    /// Contrast modulation. [0.0 - 2.0]
    pub contrast: f32,

    /// Brightness modulation. [0.0 - 2.0]
    pub brightness: f32,

    /// Saturation boost of blurred colors. [0.0 - 1.0]
    pub vibrancy: f32,

    /// Strength of vibrancy on dark areas. [0.0 - 1.0]
    pub vibrancy_darkness: f32,

    /// Blur behind the special workspace. Expensive.
    pub special: bool,

    /// Blur popups such as context menus.
    pub popups: bool,

    /// Pixels with opacity below this value are not blurred in popups. [0.0 - 1.0]
    pub popups_ignorealpha: f32,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 8,
            passes: 1,
            ignore_opacity: false,
            new_optimizations: true,
            xray: false,
            noise: 0.0117,
            contrast: 0.8916,
            brightness: 0.8172,
            vibrancy: 0.1696,
            vibrancy_darkness: 0.0,
            special: false,
            popups: false,
            popups_ignorealpha: 0.2,
        }
    }
}
