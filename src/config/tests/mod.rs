//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]

use crate::config::{
    Config,
    values::{Color, Gaps, Gradient, Vec2},
};

#[test]
fn config_default_matches_compiled_table() {
    let config = Config::default();

    assert!(config.variables.is_empty());
    assert_eq!(config.general.border_size, 1);
    assert_eq!(config.general.gaps_in, Gaps::uniform(5));
    assert_eq!(config.general.gaps_out, Gaps::uniform(20));
    assert_eq!(config.general.col_active_border, Gradient::from_argb(0xffff_ffff));
    assert_eq!(config.general.col_inactive_border, Gradient::from_argb(0xff44_4444));
    assert_eq!(config.general.layout, "dwindle");
    assert_eq!(config.decoration.col_shadow, Color::from_argb(0xee1a_1a1a));
    assert_eq!(config.decoration.col_shadow_inactive, config.decoration.col_shadow);
    assert_eq!(config.decoration.shadow_offset, Vec2::default());
    assert_eq!(config.decoration.blur.size, 8);
    assert_eq!(config.decoration.blur.passes, 1);
    assert_eq!(config.input.kb_layout, "us");
    assert_eq!(config.input.follow_mouse, 1);
    assert_eq!(config.group.groupbar.font_family, "Sans");
    assert_eq!(config.misc.force_default_wallpaper, -1);
    assert_eq!(config.misc.background_color, Color::from_argb(0xff11_1111));
    assert_eq!(config.opengl.force_introspection, 2);
    assert!(config.debug.disable_logs);
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = match toml::to_string(&config) {
        Ok(s) => s,
        Err(e) => panic!("serialization failed: {e}"),
    };
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[decoration.blur]"));
    assert!(toml_str.contains("col.active_border"));
}

#[test]
fn config_serialize_roundtrip() {
    let mut original = Config::default();
    original.general.gaps_in = Gaps {
        top: 1,
        right: 2,
        bottom: 3,
        left: 4,
    };
    original
        .variables
        .insert("accent".to_string(), "ff0000".to_string());

    let json = match serde_json::to_string(&original) {
        Ok(s) => s,
        Err(e) => panic!("serialization failed: {e}"),
    };
    let deserialized: Config = match serde_json::from_str(&json) {
        Ok(config) => config,
        Err(e) => panic!("deserialization failed: {e}"),
    };

    assert_eq!(original, deserialized);
}

#[test]
fn partial_document_fills_defaults() {
    let config: Config = match serde_json::from_str(r#"{ "general": { "border_size": 4 } }"#) {
        Ok(config) => config,
        Err(e) => panic!("deserialization failed: {e}"),
    };

    assert_eq!(config.general.border_size, 4);
    assert_eq!(config.general.gaps_out, Gaps::uniform(20));
    assert_eq!(config.decoration, Config::default().decoration);
}

#[test]
fn variable_lookup_accepts_sigil() {
    let mut config = Config::default();
    config
        .variables
        .insert("accent".to_string(), "ff0000".to_string());

    assert_eq!(config.variable("accent"), Some("ff0000"));
    assert_eq!(config.variable("$accent"), Some("ff0000"));
    assert_eq!(config.variable("missing"), None);
}
