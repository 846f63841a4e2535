use std::collections::HashMap;

use super::{PropertyInfo, SectionInfo, extract_property_info, get_all_sections};
use crate::{
    Result,
    config::{Config, loading::OptionRegistry},
};

const TABLE_HEADER: &str = "| Option | Type | Description | Default | Valid values |\n\
                            |--------|------|-------------|---------|--------------|";

/// One documented option row.
struct OptionRow {
    key: &'static str,
    kind: String,
    description: String,
    default_value: String,
    validator: String,
}

/// Renders the complete option reference as markdown.
///
/// One section per configuration group, one row per option with its kind,
/// description, compiled default and validator.
///
/// # Errors
///
/// Returns `HyprconfError::DescriptorTable` if the compiled option table is
/// inconsistent.
pub fn render_reference() -> Result<String> {
    let mut content = String::from("# Configuration Reference\n\n");

    for section in get_all_sections() {
        content.push_str(&generate_section_page(&section)?);
    }

    Ok(content)
}

/// Renders the markdown table of a single section.
///
/// # Errors
///
/// Returns `HyprconfError::DescriptorTable` if the compiled option table is
/// inconsistent.
pub fn generate_section_page(section: &SectionInfo) -> Result<String> {
    let registry = OptionRegistry::global()?;
    let properties: HashMap<String, PropertyInfo> =
        extract_property_info(&(section.schema)().to_value())
            .into_iter()
            .map(|property| (property.name.clone(), property))
            .collect();

    let mut defaults = Config::default();
    let rows: Vec<OptionRow> = registry
        .iter()
        .filter(|descriptor| descriptor.section() == section.path)
        .map(|descriptor| OptionRow {
            key: descriptor.key(),
            kind: descriptor.kind().to_string(),
            description: properties
                .get(descriptor.key())
                .map(|property| property.description.clone())
                .unwrap_or_default(),
            default_value: descriptor.display_value(&mut defaults),
            validator: descriptor.validator().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    Ok(generate_property_table(section.title, section.path, &rows))
}

/// Generates a markdown table documenting the options of one section.
fn generate_property_table(section_title: &str, config_path: &str, rows: &[OptionRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let option_rows = rows
        .iter()
        .map(|row| {
            format!(
                "| `{}` | `{}` | {} | `{}` | {} |",
                row.key,
                row.kind,
                row.description,
                row.default_value,
                row.validator
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!("## {section_title}\n**Config path:** `{config_path}`\n\n{TABLE_HEADER}\n{option_rows}\n\n")
}
