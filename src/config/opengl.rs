use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Renderer workarounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OpenGlConfig {
    /// Reduce flickering on nvidia at the cost of possible frame drops. Ignored elsewhere.
    pub nvidia_anti_flicker: bool,

    /// Introspection: 0 default, 1 always on, 2 always on with nvidia. [0/1/2]
    pub force_introspection: i64,
}

impl Default for OpenGlConfig {
    fn default() -> Self {
        Self {
            nvidia_anti_flicker: true,
            force_introspection: 2,
        }
    }
}
