use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debugging switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DebugConfig {
    /// Show the performance overlay. Disable VFR for accurate results.
    pub overlay: bool,

    /// Flash areas updated by damage tracking. Epilepsy warning.
    pub damage_blink: bool,

    /// Disable logging to a file.
    pub disable_logs: bool,

    /// Disable timestamps in logs.
    pub disable_time: bool,

    /// Damage tracking mode: 0 none, 1 monitor, 2 full. [0/1/2]
    pub damage_tracking: i64,

    /// Log to stdout.
    pub enable_stdout_logs: bool,

    /// Set to 1 and back to 0 to crash the compositor. [0/1]
    pub manual_crash: i64,

    /// Do not display configuration errors.
    pub suppress_errors: bool,

    /// Seconds before the watchdog aborts a stuck signal handler. 0 disables.
    pub watchdog_timeout: i64,

    /// Skip scale factor verification.
    pub disable_scale_checks: bool,

    /// Maximum number of configuration errors displayed.
    pub error_limit: i64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            overlay: false,
            damage_blink: false,
            disable_logs: true,
            disable_time: true,
            damage_tracking: 2,
            enable_stdout_logs: false,
            manual_crash: 0,
            suppress_errors: false,
            watchdog_timeout: 5,
            disable_scale_checks: false,
            error_limit: 5,
        }
    }
}
