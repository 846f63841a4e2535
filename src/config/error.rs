//! Per-value errors raised while parsing a single option.

use thiserror::Error;

/// Failure to turn one raw option value into its typed form.
///
/// Every variant is local to a single option. The merge engine records it
/// as a diagnostic and keeps the option's compiled default.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// Raw text is not a valid value of the expected kind
    #[error("cannot parse '{value}' as {expected}: {reason}")]
    Parse {
        /// The offending raw text
        value: String,
        /// Human readable name of the expected kind
        expected: &'static str,
        /// Why parsing failed
        reason: String,
    },

    /// A `$name` reference has no binding
    #[error("undefined variable '${name}'")]
    UndefinedVariable {
        /// Name of the missing variable
        name: String,
    },

    /// A variable refers back to itself through a chain of bindings
    #[error("circular variable reference: {}", chain.join(" -> "))]
    CyclicVariable {
        /// Names in resolution order, ending with the repeated name
        chain: Vec<String>,
    },

    /// Substitution nested deeper than the allowed maximum
    #[error("variable '${name}' exceeds the maximum substitution depth of {depth}")]
    RecursionLimit {
        /// Variable being resolved when the limit was hit
        name: String,
        /// The depth limit
        depth: usize,
    },

    /// Substitution produced a value larger than the allowed maximum
    #[error("variable '${name}' expands past the maximum of {limit} bytes")]
    ExpansionLimit {
        /// Variable whose substitution crossed the limit
        name: String,
        /// The size limit in bytes
        limit: usize,
    },
}

impl ValueError {
    /// Creates a parse error for `value` with the given expected kind.
    pub fn parse(value: &str, expected: &'static str, reason: impl Into<String>) -> Self {
        ValueError::Parse {
            value: value.to_string(),
            expected,
            reason: reason.into(),
        }
    }
}
