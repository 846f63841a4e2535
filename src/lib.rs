//! Hyprconf - typed configuration model for a Wayland compositor.
//!
//! Turns a sparse set of raw `name = value` overrides into a fully
//! populated, validated configuration object. The main features include:
//!
//! - Typed parsers for booleans, numbers, colors, gradients and CSS style
//!   box shorthand
//! - `$name` custom variables with cycle and depth detection
//! - A forgiving merge engine that reports problems as diagnostics instead
//!   of failing the load
//! - A reactive store that swaps configurations atomically and broadcasts
//!   per-option changes
//!
//! # Quick Start
//!
//! ```rust
//! use hyprconf::{Config, Overrides, VariableTable};
//!
//! let mut variables = VariableTable::new();
//! variables.define("accent", "ff0000");
//!
//! let mut overrides = Overrides::new();
//! overrides.set("general.col.active_border", "$accent 00ff00 45deg");
//! overrides.set("decoration.active_opacity", "1.5");
//!
//! let (config, diagnostics) = Config::build(&overrides, &variables)?;
//! assert_eq!(config.general.col_active_border.angle, 45.0);
//! assert_eq!(config.decoration.active_opacity, 1.0);
//! assert_eq!(diagnostics.len(), 1);
//! # Ok::<(), hyprconf::HyprconfError>(())
//! ```

/// Configuration schema, value parsers and the merge engine.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Reference documentation generated from the option table.
pub mod docs;

/// Reactive configuration store with change tracking.
pub mod config_store;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use config::{
    Config,
    loading::{Diagnostic, DiagnosticKind, Overrides},
    variables::VariableTable,
};
pub use self::core::{HyprconfError, Result};
