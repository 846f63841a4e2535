//! Configuration schema, value parsers and the merge engine.
//!
//! Defines the complete configuration tree of the compositor. Every field
//! has a compiled default; [`Config::build`] layers a set of raw overrides
//! and custom variables on top of those defaults.

mod animations;
mod binds;
mod debug;
mod decoration;
pub mod error;
mod general;
mod gestures;
mod group;
mod input;
pub mod loading;
mod misc;
mod opengl;
pub mod values;
pub mod variables;
mod xwayland;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

pub use animations::AnimationsConfig;
pub use binds::BindsConfig;
pub use debug::DebugConfig;
pub use decoration::{BlurConfig, DecorationConfig};
pub use general::GeneralConfig;
pub use gestures::GesturesConfig;
pub use group::{GroupConfig, GroupbarConfig};
pub use input::InputConfig;
pub use misc::MiscConfig;
pub use opengl::OpenGlConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use xwayland::XWaylandConfig;

/// Main configuration structure.
///
/// The fully resolved option tree plus the resolved custom variables.
/// Built once per load pass and never mutated afterwards; a reload
/// produces a new value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Custom variables that resolved successfully, by name.
    pub variables: BTreeMap<String, String>,

    /// General window management settings.
    pub general: GeneralConfig,

    /// Window decorations.
    pub decoration: DecorationConfig,

    /// Animation switches.
    pub animations: AnimationsConfig,

    /// Keyboard and pointer input.
    pub input: InputConfig,

    /// Touch gestures.
    pub gestures: GesturesConfig,

    /// Window groups.
    pub group: GroupConfig,

    /// Miscellaneous behavior.
    pub misc: MiscConfig,

    /// Keybind behavior.
    pub binds: BindsConfig,

    /// XWayland settings.
    pub xwayland: XWaylandConfig,

    /// Renderer workarounds.
    pub opengl: OpenGlConfig,

    /// Debugging switches.
    pub debug: DebugConfig,
}

impl Config {
    /// Looks up a resolved custom variable.
    pub fn variable(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix('$').unwrap_or(name);
        self.variables.get(name).map(String::as_str)
    }
}
