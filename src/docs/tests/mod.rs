#![allow(clippy::panic)]

use crate::docs::{config_schema, extract_property_info, get_all_sections, render_reference};

#[test]
fn reference_covers_every_section() {
    let reference = match render_reference() {
        Ok(reference) => reference,
        Err(e) => panic!("render failed: {e}"),
    };

    for section in get_all_sections() {
        assert!(
            reference.contains(&format!("**Config path:** `{}`", section.path)),
            "{} missing",
            section.path
        );
    }
}

#[test]
fn reference_rows_carry_defaults_and_validators() {
    let reference = match render_reference() {
        Ok(reference) => reference,
        Err(e) => panic!("render failed: {e}"),
    };

    let passes = reference
        .lines()
        .find(|line| line.starts_with("| `passes` |"))
        .unwrap_or_default();
    assert!(passes.contains("`int`"));
    assert!(passes.contains("`1`"));
    assert!(passes.contains("[1, 10]"));

    let border = reference
        .lines()
        .find(|line| line.starts_with("| `col.active_border` |"))
        .unwrap_or_default();
    assert!(border.contains("`gradient`"));
    assert!(border.contains("rgba(ffffffff)"));
    assert!(border.contains("active window"));
}

#[test]
fn section_schemas_expose_renamed_keys() {
    let Some(general) = get_all_sections().into_iter().find(|s| s.path == "general") else {
        panic!("general section missing");
    };

    let properties = extract_property_info(&(general.schema)().to_value());
    assert!(properties.iter().any(|p| p.name == "col.active_border"));
    assert!(properties.iter().any(|p| p.name == "gaps_in"));
}

#[test]
fn config_schema_lists_sections() {
    let schema = config_schema();
    let Some(properties) = schema.get("properties").and_then(|p| p.as_object()) else {
        panic!("schema has no properties");
    };

    for key in ["variables", "general", "decoration", "input", "debug"] {
        assert!(properties.contains_key(key), "{key} missing");
    }
}
