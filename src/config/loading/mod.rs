//! Defaulting and merge engine: option table, overrides and diagnostics.

mod diagnostics;
mod options;
mod overrides;
mod registry;


pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use overrides::Overrides;
pub use registry::{Accessor, Applied, OptionDescriptor, OptionKind, OptionRegistry, SECTIONS, Slot};
use tracing::{debug, info, instrument, warn};

use super::{
    Config,
    variables::{Resolver, VariableTable},
};
use crate::Result;

impl Config {
    /// Builds a configuration from compiled defaults, raw overrides and
    /// custom variables.
    ///
    /// Options without an override keep their default untouched. Each
    /// override has its `$name` references substituted, is parsed by the
    /// option's kind and validated. Problems are collected as diagnostics
    /// and the option keeps its default; nothing a user writes aborts the
    /// build. The result is a pure function of the two inputs.
    ///
    /// Diagnostics are ordered: failed custom variables by name, then
    /// options in table order, then unknown names sorted.
    ///
    /// # Errors
    ///
    /// Returns `HyprconfError::DescriptorTable` if the compiled option table
    /// is inconsistent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hyprconf::{Config, Overrides, VariableTable};
    ///
    /// let mut overrides = Overrides::new();
    /// overrides.set("general.gaps_in", "5,10");
    ///
    /// let (config, diagnostics) = Config::build(&overrides, &VariableTable::new())?;
    /// assert_eq!(config.general.gaps_in.right, 10);
    /// assert!(diagnostics.is_empty());
    /// # Ok::<(), hyprconf::HyprconfError>(())
    /// ```
    #[instrument(skip_all, fields(overrides = overrides.len(), variables = variables.len()))]
    pub fn build(
        overrides: &Overrides,
        variables: &VariableTable,
    ) -> Result<(Config, Vec<Diagnostic>)> {
        let registry = OptionRegistry::global()?;
        let mut config = Config::default();
        let mut diagnostics = Vec::new();

        let mut resolver = variables.resolver();
        let (resolved, failures) = resolver.resolve_all();
        config.variables = resolved;
        for (name, error) in &failures {
            diagnostics.push(Diagnostic::from_value_error(format!("${name}"), error));
        }

        for descriptor in registry.iter() {
            let Some(raw) = overrides.get(descriptor.name) else {
                continue;
            };

            if let Some(diagnostic) = apply_override(descriptor, &mut config, raw, &mut resolver) {
                diagnostics.push(diagnostic);
            }
        }

        for (name, _) in overrides.iter() {
            if registry.find(name).is_none() {
                diagnostics.push(Diagnostic::new(
                    name,
                    DiagnosticKind::UnknownOption,
                    format!("no option named '{name}'"),
                ));
            }
        }

        for diagnostic in &diagnostics {
            warn!(
                option = %diagnostic.option,
                kind = %diagnostic.kind,
                "{}",
                diagnostic.message
            );
        }

        info!(
            overrides = overrides.len(),
            variables = config.variables.len(),
            diagnostics = diagnostics.len(),
            "Configuration built"
        );

        Ok((config, diagnostics))
    }
}

fn apply_override(
    descriptor: &OptionDescriptor,
    config: &mut Config,
    raw: &str,
    resolver: &mut Resolver<'_>,
) -> Option<Diagnostic> {
    let value = match resolver.resolve(raw) {
        Ok(value) => value,
        Err(error) => return Some(Diagnostic::from_value_error(descriptor.name, &error)),
    };

    match descriptor.apply(config, &value) {
        Ok(Applied::Set) => {
            debug!(option = descriptor.name, value = %value, "Applied override");
            None
        }
        Ok(Applied::Clamped {
            requested,
            stored,
            bounds,
        }) => Some(Diagnostic::new(
            descriptor.name,
            DiagnosticKind::ClampedValue,
            format!("{requested} is outside {bounds}, clamped to {stored}"),
        )),
        Err(error) => Some(Diagnostic::from_value_error(descriptor.name, &error)),
    }
}
