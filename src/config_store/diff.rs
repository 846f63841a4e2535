use std::{collections::BTreeSet, sync::OnceLock, time::Instant};

use toml::Value;

use super::{ConfigChange, StoreError, path_ops::navigate_path};
use crate::config::{Config, loading::OptionRegistry};

static DEFAULT_CONFIG: OnceLock<Value> = OnceLock::new();

/// Compares two configurations option by option.
///
/// Yields one change per option whose serialized value differs, in table
/// order, followed by one change per added, removed or modified custom
/// variable (`variables.<name>`), sorted by name. All changes share one
/// timestamp.
///
/// # Errors
/// Returns error if either configuration cannot be serialized to TOML, or if
/// the option table is inconsistent.
pub fn diff_configs(old: &Config, new: &Config) -> Result<Vec<ConfigChange>, StoreError> {
    let registry = OptionRegistry::global().map_err(|e| StoreError::Serialization {
        content_type: "option table".to_string(),
        details: e.to_string(),
    })?;

    let old_value = to_toml(old)?;
    let new_value = to_toml(new)?;
    let timestamp = Instant::now();
    let mut changes = Vec::new();

    for descriptor in registry.iter() {
        let before = navigate_path(&old_value, descriptor.name)?;
        let after = navigate_path(&new_value, descriptor.name)?;

        if before != after {
            changes.push(ConfigChange {
                path: descriptor.name.to_string(),
                old_value: Some(before),
                new_value: Some(after),
                timestamp,
            });
        }
    }

    let names: BTreeSet<&String> = old.variables.keys().chain(new.variables.keys()).collect();
    for name in names {
        let before = old.variables.get(name);
        let after = new.variables.get(name);

        if before != after {
            changes.push(ConfigChange {
                path: format!("variables.{name}"),
                old_value: before.cloned().map(Value::String),
                new_value: after.cloned().map(Value::String),
                timestamp,
            });
        }
    }

    Ok(changes)
}

pub(super) fn to_toml(config: &Config) -> Result<Value, StoreError> {
    Value::try_from(config).map_err(|e| StoreError::Serialization {
        content_type: "config".to_string(),
        details: e.to_string(),
    })
}

#[allow(clippy::expect_used)]
fn get_default_config() -> &'static Value {
    DEFAULT_CONFIG.get_or_init(|| {
        Value::try_from(Config::default()).expect("Config::default() must serialize to valid TOML")
    })
}

pub(super) fn get_default_for_path(path: &str) -> Result<Value, StoreError> {
    navigate_path(get_default_config(), path)
}
