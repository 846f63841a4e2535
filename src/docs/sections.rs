use schemars::{Schema, schema_for};

use crate::config::{
    AnimationsConfig, BindsConfig, BlurConfig, DebugConfig, DecorationConfig, GeneralConfig,
    GesturesConfig, GroupConfig, GroupbarConfig, InputConfig, MiscConfig, OpenGlConfig,
    XWaylandConfig,
};

/// Produces the JSON schema of one section structure.
pub type SchemeFn = fn() -> Schema;

/// A documented configuration section.
pub struct SectionInfo {
    /// Dotted section path, e.g. `decoration.blur`.
    pub path: &'static str,
    /// Heading used in the reference.
    pub title: &'static str,
    /// Schema of the section structure.
    pub schema: SchemeFn,
}

/// Every section in reference order.
pub fn get_all_sections() -> Vec<SectionInfo> {
    vec![
        section("general", "General", || schema_for!(GeneralConfig)),
        section("decoration", "Decoration", || schema_for!(DecorationConfig)),
        section("decoration.blur", "Blur", || schema_for!(BlurConfig)),
        section("animations", "Animations", || schema_for!(AnimationsConfig)),
        section("input", "Input", || schema_for!(InputConfig)),
        section("gestures", "Gestures", || schema_for!(GesturesConfig)),
        section("group", "Group", || schema_for!(GroupConfig)),
        section("group.groupbar", "Groupbar", || schema_for!(GroupbarConfig)),
        section("misc", "Misc", || schema_for!(MiscConfig)),
        section("binds", "Binds", || schema_for!(BindsConfig)),
        section("xwayland", "XWayland", || schema_for!(XWaylandConfig)),
        section("opengl", "OpenGL", || schema_for!(OpenGlConfig)),
        section("debug", "Debug", || schema_for!(DebugConfig)),
    ]
}

fn section(path: &'static str, title: &'static str, schema: SchemeFn) -> SectionInfo {
    SectionInfo {
        path,
        title,
        schema,
    }
}
