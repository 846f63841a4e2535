use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// XWayland client scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct XWaylandConfig {
    /// Nearest neighbor filtering for XWayland apps: pixelated instead of blurry.
    pub use_nearest_neighbor: bool,

    /// Force a scale of 1 on XWayland windows on scaled displays.
    pub force_zero_scaling: bool,
}

impl Default for XWaylandConfig {
    fn default() -> Self {
        Self {
            use_nearest_neighbor: true,
            force_zero_scaling: false,
        }
    }
}
