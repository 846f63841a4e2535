//! User defined variables substituted into raw option values.
//!
//! A reference is `$` followed by a name (`[A-Za-z_][A-Za-z0-9_]*`). A `$`
//! that is not followed by a name character is kept as literal text.
//! Bindings may reference other bindings; expansion is recursive and stops
//! with an error on cycles, beyond [`MAX_DEPTH`] nested variables or once
//! a value grows past [`MAX_EXPANDED_LEN`] bytes.

mod circular_detection;

#[cfg(test)]
mod tests;

use std::{
    collections::{BTreeMap, HashMap},
    sync::OnceLock,
};

use circular_detection::CircularDetector;
use regex::Regex;

use super::error::ValueError;

/// Maximum number of nested variable expansions for one value.
pub const MAX_DEPTH: usize = 64;

/// Maximum size in bytes of any single expanded value.
pub const MAX_EXPANDED_LEN: usize = 64 * 1024;

static REFERENCE: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)]
fn reference_pattern() -> &'static Regex {
    REFERENCE.get_or_init(|| {
        Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").expect("variable reference pattern must compile")
    })
}

/// Name to raw value bindings declared by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableTable {
    bindings: HashMap<String, String>,
}

impl VariableTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a binding, replacing any previous value for `name`.
    ///
    /// A leading `$` on the name is ignored, so `define("$accent", ..)` and
    /// `define("accent", ..)` are the same binding.
    pub fn define(&mut self, name: impl AsRef<str>, raw_value: impl Into<String>) {
        let name = name.as_ref();
        let name = name.strip_prefix('$').unwrap_or(name);
        self.bindings.insert(name.to_string(), raw_value.into());
    }

    /// Returns the unexpanded value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Substitutes every variable reference in `raw`.
    ///
    /// # Errors
    ///
    /// - `ValueError::UndefinedVariable` if a referenced name has no binding
    /// - `ValueError::CyclicVariable` if a binding refers back to itself
    /// - `ValueError::RecursionLimit` if expansion nests deeper than [`MAX_DEPTH`]
    /// - `ValueError::ExpansionLimit` if a substitution grows past [`MAX_EXPANDED_LEN`]
    pub fn resolve(&self, raw: &str) -> Result<String, ValueError> {
        self.resolver().resolve(raw)
    }

    /// Fully expands the binding of `name`.
    ///
    /// # Errors
    ///
    /// Same as [`VariableTable::resolve`].
    pub fn resolve_variable(&self, name: &str) -> Result<String, ValueError> {
        self.resolver().resolve_variable(name)
    }

    /// Expands every binding.
    ///
    /// Returns the successfully expanded table, sorted by name, and the
    /// failures keyed by variable name.
    pub fn resolve_all(&self) -> (BTreeMap<String, String>, Vec<(String, ValueError)>) {
        self.resolver().resolve_all()
    }

    /// Starts a resolver that remembers every binding it expands.
    ///
    /// Use one resolver for all values of a single build so each binding
    /// is expanded at most once.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver {
            table: self,
            detector: CircularDetector::new(),
            expanded: HashMap::new(),
        }
    }
}

/// A fully expanded binding and how many nested bindings it took.
#[derive(Debug, Clone)]
struct Expanded {
    value: String,
    height: usize,
}

/// Expands references against one [`VariableTable`], caching bindings.
///
/// Only successful expansions are cached. Failures depend on the chain
/// they were reached through and are recomputed.
#[derive(Debug)]
pub struct Resolver<'a> {
    table: &'a VariableTable,
    detector: CircularDetector,
    expanded: HashMap<&'a str, Expanded>,
}

impl<'a> Resolver<'a> {
    /// Substitutes every variable reference in `raw`.
    ///
    /// # Errors
    ///
    /// Same as [`VariableTable::resolve`].
    pub fn resolve(&mut self, raw: &str) -> Result<String, ValueError> {
        self.substitute(raw).map(|(value, _)| value)
    }

    /// Fully expands the binding of `name`.
    ///
    /// # Errors
    ///
    /// Same as [`VariableTable::resolve`].
    pub fn resolve_variable(&mut self, name: &str) -> Result<String, ValueError> {
        self.expand(name).map(|expanded| expanded.value)
    }

    /// Expands every binding of the table, sorted by name.
    pub fn resolve_all(&mut self) -> (BTreeMap<String, String>, Vec<(String, ValueError)>) {
        let table = self.table;
        let mut names: Vec<&'a String> = table.bindings.keys().collect();
        names.sort();

        let mut resolved = BTreeMap::new();
        let mut failures = Vec::new();

        for name in names {
            match self.resolve_variable(name) {
                Ok(value) => {
                    resolved.insert(name.clone(), value);
                }
                Err(e) => failures.push((name.clone(), e)),
            }
        }

        (resolved, failures)
    }

    /// Returns the substituted text and the tallest binding it referenced.
    fn substitute(&mut self, raw: &str) -> Result<(String, usize), ValueError> {
        let mut result = String::with_capacity(raw.len());
        let mut copied_up_to = 0;
        let mut height = 0;

        for captures in reference_pattern().captures_iter(raw) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };

            let expanded = self.expand(name.as_str())?;
            if result.len() + expanded.value.len() > MAX_EXPANDED_LEN {
                return Err(ValueError::ExpansionLimit {
                    name: name.as_str().to_string(),
                    limit: MAX_EXPANDED_LEN,
                });
            }

            result.push_str(&raw[copied_up_to..whole.start()]);
            result.push_str(&expanded.value);
            height = height.max(expanded.height);
            copied_up_to = whole.end();
        }

        result.push_str(&raw[copied_up_to..]);
        Ok((result, height))
    }

    fn expand(&mut self, name: &str) -> Result<Expanded, ValueError> {
        self.detector.detect_circular_reference(name)?;

        let depth_limit = || ValueError::RecursionLimit {
            name: name.to_string(),
            depth: MAX_DEPTH,
        };

        if let Some(cached) = self.expanded.get(name) {
            if self.detector.depth() + cached.height > MAX_DEPTH {
                return Err(depth_limit());
            }
            return Ok(cached.clone());
        }

        if self.detector.depth() >= MAX_DEPTH {
            return Err(depth_limit());
        }

        let table = self.table;
        let (key, binding) =
            table
                .bindings
                .get_key_value(name)
                .ok_or_else(|| ValueError::UndefinedVariable {
                    name: name.to_string(),
                })?;

        self.detector.push_to_chain(name);
        let result = self.substitute(binding);
        self.detector.pop_from_chain();

        let (value, height) = result?;
        let expanded = Expanded {
            value,
            height: height + 1,
        };
        self.expanded.insert(key.as_str(), expanded.clone());
        Ok(expanded)
    }
}

impl<K, V> FromIterator<(K, V)> for VariableTable
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.define(name, value);
        }
        table
    }
}
