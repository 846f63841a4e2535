use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Animation master switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnimationsConfig {
    /// Enable animations.
    pub enabled: bool,

    /// Enable the first launch animation.
    pub first_launch_animation: bool,
}

impl Default for AnimationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            first_launch_animation: true,
        }
    }
}
