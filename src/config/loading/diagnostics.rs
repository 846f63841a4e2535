use std::fmt;

use serde::Serialize;

use crate::config::error::ValueError;

/// Category of a non-fatal problem found while building a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The override names no known option; it was ignored.
    UnknownOption,

    /// The value could not be parsed or is not an allowed choice; the default was kept.
    ParseFailure,

    /// The value was outside the option's bounds and was clamped.
    ClampedValue,

    /// The value references an undefined custom variable; the default was kept.
    UndefinedVariable,

    /// The value references a circular chain of custom variables; the default was kept.
    CyclicVariable,

    /// Variable substitution nested too deeply or grew too large; the default was kept.
    RecursionLimit,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnknownOption => write!(f, "unknown option"),
            DiagnosticKind::ParseFailure => write!(f, "parse failure"),
            DiagnosticKind::ClampedValue => write!(f, "clamped value"),
            DiagnosticKind::UndefinedVariable => write!(f, "undefined variable"),
            DiagnosticKind::CyclicVariable => write!(f, "cyclic variable"),
            DiagnosticKind::RecursionLimit => write!(f, "recursion limit"),
        }
    }
}

/// A per-option problem collected during a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Option the problem belongs to; custom variables appear as `$name`.
    pub option: String,
    /// Problem category.
    pub kind: DiagnosticKind,
    /// Human readable explanation.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    pub fn new(option: impl Into<String>, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            kind,
            message: message.into(),
        }
    }

    /// Converts a value error for `option` into the matching diagnostic.
    pub fn from_value_error(option: impl Into<String>, error: &ValueError) -> Self {
        let kind = match error {
            ValueError::Parse { .. } => DiagnosticKind::ParseFailure,
            ValueError::UndefinedVariable { .. } => DiagnosticKind::UndefinedVariable,
            ValueError::CyclicVariable { .. } => DiagnosticKind::CyclicVariable,
            ValueError::RecursionLimit { .. } | ValueError::ExpansionLimit { .. } => {
                DiagnosticKind::RecursionLimit
            }
        };

        Self::new(option, kind, error.to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.option, self.kind, self.message)
    }
}
