use std::collections::BTreeMap;

use toml::Value;

/// Raw option values supplied by the external loader for one load pass.
///
/// Names are fully qualified (`general.gaps_in`); the legacy
/// `section:key` spelling is normalized to dots. Setting a name twice keeps
/// the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: BTreeMap<String, String>,
}

impl Overrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw value of `name`, replacing any earlier value.
    pub fn set(&mut self, name: impl AsRef<str>, raw_value: impl Into<String>) {
        self.entries
            .insert(normalize_name(name.as_ref()), raw_value.into());
    }

    /// Raw value for `name`, if one was supplied.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of distinct option names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no overrides were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, raw value)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Layers `overlay` on top of `self`; overlay values win per name.
    pub fn layer(mut self, overlay: Overrides) -> Overrides {
        self.entries.extend(overlay.entries);
        self
    }

    /// Merges imported override sets under the main set.
    ///
    /// Imports are applied in order, so a later import wins over an earlier
    /// one, and `main` wins over all of them.
    pub fn merge_layers(imports: Vec<Overrides>, main: Overrides) -> Overrides {
        imports
            .into_iter()
            .fold(Overrides::new(), Overrides::layer)
            .layer(main)
    }

    /// Flattens a parsed TOML document into dotted option names.
    ///
    /// Nested tables become name segments. Scalars are stringified and
    /// arrays are joined with spaces, so `gaps_in = [5, 10]` reads as `"5 10"`.
    pub fn from_toml(value: &Value) -> Overrides {
        let mut overrides = Overrides::new();
        flatten_toml("", value, &mut overrides);
        overrides
    }
}

impl<K, V> FromIterator<(K, V)> for Overrides
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Overrides::new();
        overrides.extend(iter);
        overrides
    }
}

impl<K, V> Extend<(K, V)> for Overrides
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().replace(':', ".")
}

fn flatten_toml(prefix: &str, value: &Value, overrides: &mut Overrides) {
    match value {
        Value::Table(table) => {
            for (key, child) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_toml(&path, child, overrides);
            }
        }
        _ if prefix.is_empty() => {}
        other => overrides.set(prefix, scalar_text(other)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}
