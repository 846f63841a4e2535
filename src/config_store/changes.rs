use std::time::Instant;

use toml::Value;

use crate::HyprconfError;

/// Represents a configuration change with path-based identification.
///
/// This struct captures all relevant information about a configuration change,
/// including what changed and when it changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigChange {
    /// Option name in dot notation (e.g., "general.col.active_border"),
    /// or `variables.<name>` for a custom variable.
    pub path: String,
    /// The previous value, or `None` if the entry did not exist.
    pub old_value: Option<Value>,
    /// The new value, or `None` if the entry was removed.
    pub new_value: Option<Value>,
    /// Timestamp when the change occurred.
    pub timestamp: Instant,
}

/// Errors that can occur during configuration store operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The specified configuration path does not exist.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The value type does not match the expected type for the field.
    #[error("Type mismatch at {path}: Expected {expected_type}, got {actual_value:?}")]
    TypeMismatch {
        /// The path where the type mismatch occurred.
        path: String,
        /// The expected type name.
        expected_type: &'static str,
        /// The actual value that was provided.
        actual_value: Option<Value>,
    },

    /// Error occurred while serializing configuration
    #[error("failed to serialize {content_type}: {details}")]
    Serialization {
        /// Type of content being serialized (e.g., "config")
        content_type: String,
        /// Serialization error details
        details: String,
    },
}

impl From<StoreError> for HyprconfError {
    fn from(error: StoreError) -> Self {
        let operation = match error {
            StoreError::InvalidPath(_) => "lookup",
            StoreError::TypeMismatch { .. } => "extract",
            StoreError::Serialization { .. } => "serialize",
        };

        HyprconfError::Store {
            operation: operation.to_string(),
            details: error.to_string(),
        }
    }
}

impl ConfigChange {
    /// Creates a new configuration change.
    ///
    /// # Arguments
    ///
    /// * `path` - The dot-separated option name
    /// * `old_value` - The previous value of the option (if any)
    /// * `new_value` - The new value of the option (if any)
    pub fn new(path: String, old_value: Option<Value>, new_value: Option<Value>) -> Self {
        Self {
            path,
            old_value,
            new_value,
            timestamp: Instant::now(),
        }
    }

    /// Extracts the new value as a specific type.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TypeMismatch` if the entry was removed or the
    /// value cannot be deserialized into the requested type.
    pub fn extract<T>(&self) -> Result<T, StoreError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mismatch = || StoreError::TypeMismatch {
            path: self.path.clone(),
            expected_type: std::any::type_name::<T>(),
            actual_value: self.new_value.clone(),
        };

        let value = self.new_value.clone().ok_or_else(mismatch)?;
        T::deserialize(value).map_err(|_| mismatch())
    }

    /// Attempts to extract the new value as a string.
    ///
    /// Returns `None` if the value is not a string.
    pub fn as_string(&self) -> Option<String> {
        match &self.new_value {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// Whether the change removed the entry.
    pub fn is_removal(&self) -> bool {
        self.new_value.is_none()
    }
}
