//! Schema parsing and property extraction utilities for JSON Schema documents.

use schemars::schema_for;
use serde_json::Value;

use crate::config::Config;

/// Represents information about a single property in a JSON Schema.
#[derive(Debug, Clone)]
pub struct PropertyInfo {
    /// The serialized name of the property, e.g. `col.active_border`.
    pub name: String,
    /// Human-readable description taken from the field documentation.
    pub description: String,
}

/// JSON Schema of the whole configuration object.
pub fn config_schema() -> Value {
    schema_for!(Config).to_value()
}

/// Extracts property information from a JSON Schema document.
///
/// Parses the "properties" object from a JSON Schema and returns one entry
/// per property, in schema order. Returns an empty vector if no properties
/// are found.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use hyprconf::docs::extract_property_info;
///
/// let schema = json!({
///     "properties": {
///         "border_size": {
///             "type": "integer",
///             "description": "Size of the border around windows"
///         }
///     }
/// });
///
/// let properties = extract_property_info(&schema);
/// assert_eq!(properties[0].name, "border_size");
/// assert_eq!(properties[0].description, "Size of the border around windows");
/// ```
pub fn extract_property_info(schema: &Value) -> Vec<PropertyInfo> {
    schema
        .get("properties")
        .and_then(|props| props.as_object())
        .map(build_properties)
        .unwrap_or_default()
}

fn build_properties(props_obj: &serde_json::Map<String, Value>) -> Vec<PropertyInfo> {
    props_obj
        .iter()
        .map(|(name, property)| PropertyInfo {
            name: name.clone(),
            description: get_description(property),
        })
        .collect()
}

fn get_description(property: &Value) -> String {
    property
        .get("description")
        .and_then(|desc| desc.as_str())
        .unwrap_or("No description provided")
        .replace('\n', " ")
}
