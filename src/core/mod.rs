use thiserror::Error;

/// Error types for the hyprconf crate.
///
/// User input never produces one of these: per-option problems are reported
/// as diagnostics. These variants cover programming errors in the compiled
/// option table and failures of the configuration store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HyprconfError {
    /// The compiled option table is inconsistent
    #[error("option table is inconsistent at '{option}': {details}")]
    DescriptorTable {
        /// Option name where the inconsistency was found
        option: String,
        /// What is wrong with the entry
        details: String,
    },

    /// Configuration store operation failed
    #[error("config store {operation} failed: {details}")]
    Store {
        /// Store operation that failed (e.g. "reload")
        operation: String,
        /// Failure details
        details: String,
    },
}

/// A specialized `Result` type for hyprconf operations.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `HyprconfError`.
pub type Result<T> = std::result::Result<T, HyprconfError>;

impl HyprconfError {
    /// Creates a descriptor table error for the given option.
    ///
    /// # Arguments
    ///
    /// * `option` - Name of the offending table entry
    /// * `details` - What is wrong with it
    pub fn descriptor(option: impl Into<String>, details: impl Into<String>) -> Self {
        HyprconfError::DescriptorTable {
            option: option.into(),
            details: details.into(),
        }
    }
}
