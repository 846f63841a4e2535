use toml::Value;

use super::StoreError;

/// Checks if a configuration path matches a given pattern
///
/// # Arguments
/// * `path` - The actual configuration path
/// * `pattern` - The pattern to match against (supports "*" as wildcard)
///
/// # Examples
/// * `"general.border_size"` matches `"general.border_size"`
/// * `"decoration.blur.size"` matches `"decoration.*"`
/// * `"general.border_size"` matches `"*"`
/// * `"general"` does not match `"general.border_size"`
pub(super) fn path_matches(path: &str, pattern: &str) -> bool {
    const WILDCARD: &str = "*";

    if pattern == WILDCARD {
        return true;
    };

    let path_parts: Vec<&str> = path.split('.').collect();
    let pattern_parts: Vec<&str> = pattern.split('.').collect();

    if pattern_parts.len() > path_parts.len() {
        return false;
    }

    path_parts
        .iter()
        .zip(pattern_parts.iter())
        .all(|(path_part, pattern_part)| *pattern_part == WILDCARD || path_part == pattern_part)
}

/// Navigates through a TOML value structure following a dot-separated path
///
/// Table keys may themselves contain dots (`col.active_border`); at each
/// table the shortest run of segments naming an existing key is taken.
///
/// # Arguments
/// * `value` - The root TOML value to navigate from
/// * `path` - Dot-separated path (e.g., "general.col.active_border" or "array.0.field")
///
/// # Errors
/// * `StoreError::InvalidPath` - If the path doesn't exist or is malformed
pub(super) fn navigate_path(value: &Value, path: &str) -> Result<Value, StoreError> {
    if path.is_empty() {
        return Err(StoreError::InvalidPath("Empty path".to_string()));
    }

    let parts: Vec<&str> = path.split('.').collect();
    let mut current = value;
    let mut i = 0;

    while i < parts.len() {
        match current {
            Value::Table(table) => {
                let (child, consumed) = (i + 1..=parts.len())
                    .find_map(|end| {
                        table
                            .get(&parts[i..end].join("."))
                            .map(|child| (child, end - i))
                    })
                    .ok_or_else(|| {
                        StoreError::InvalidPath(format!(
                            "Key '{}' not found in table at path '{}'",
                            parts[i],
                            parts[..i].join(".")
                        ))
                    })?;

                current = child;
                i += consumed;
            }
            Value::Array(array) => {
                let index = parts[i].parse::<usize>().map_err(|_| {
                    StoreError::InvalidPath(format!(
                        "Invalid array index '{}' at path '{}'",
                        parts[i],
                        parts[..i].join(".")
                    ))
                })?;

                current = array.get(index).ok_or_else(|| {
                    StoreError::InvalidPath(format!(
                        "Array index '{}' out of bounds at path '{}'",
                        index,
                        parts[..i].join(".")
                    ))
                })?;
                i += 1;
            }
            _ => {
                return Err(StoreError::InvalidPath(format!(
                    "Cannot navigate into {} at path '{}'",
                    current.type_str(),
                    parts[..i].join("."),
                )));
            }
        }
    }

    Ok(current.clone())
}
