use std::sync::{Arc, RwLock};

use futures::Stream;
use tokio::sync::broadcast;
use toml::Value;
use tracing::{debug, instrument};

use super::{
    ConfigChange, StoreError,
    diff::{diff_configs, get_default_for_path, to_toml},
    path_ops::{navigate_path, path_matches},
};
use crate::{
    Result,
    config::{Config, loading::Diagnostic, loading::Overrides, variables::VariableTable},
};

/// A thread-safe configuration store that publishes built configurations
/// and broadcasts changes
///
/// The current configuration is an `Arc<Config>` that is never mutated.
/// A reload builds a complete new object and replaces the reference in a
/// single write, so readers see either the previous or the new
/// configuration.
#[derive(Clone)]
pub struct ConfigStore {
    config: Arc<RwLock<Arc<Config>>>,

    change_sender: broadcast::Sender<ConfigChange>,
}

impl ConfigStore {
    /// Creates a new ConfigStore with default configuration values and a broadcast channel for change notifications
    pub fn with_defaults() -> Self {
        Self::from_config(Config::default())
    }

    /// Builds the initial configuration and wraps it in a store
    ///
    /// # Errors
    /// * `HyprconfError::DescriptorTable` - If the compiled option table is inconsistent
    pub fn load(
        overrides: &Overrides,
        variables: &VariableTable,
    ) -> Result<(Self, Vec<Diagnostic>)> {
        let (config, diagnostics) = Config::build(overrides, variables)?;
        Ok((Self::from_config(config), diagnostics))
    }

    fn from_config(config: Config) -> Self {
        let (change_sender, _) = broadcast::channel(1000);

        Self {
            config: Arc::new(RwLock::new(Arc::new(config))),
            change_sender,
        }
    }

    /// Builds a new configuration, publishes it and broadcasts every change
    ///
    /// Returns the diagnostics of the new build. Equivalent to a fresh
    /// [`ConfigStore::load`] with the new inputs, except that subscribers are
    /// notified of the differences.
    ///
    /// # Errors
    /// * `HyprconfError::DescriptorTable` - If the compiled option table is inconsistent
    /// * `HyprconfError::Store` - If the configurations cannot be compared
    #[instrument(skip_all, fields(overrides = overrides.len(), variables = variables.len()))]
    pub fn reload(
        &self,
        overrides: &Overrides,
        variables: &VariableTable,
    ) -> Result<Vec<Diagnostic>> {
        let (config, diagnostics) = Config::build(overrides, variables)?;
        let new_config = Arc::new(config);

        let old_config = {
            let mut current = match self.config.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            std::mem::replace(&mut *current, Arc::clone(&new_config))
        };

        let changes = diff_configs(&old_config, &new_config)?;
        debug!(changes = changes.len(), "Configuration reloaded");

        for change in changes {
            let _ = self.change_sender.send(change);
        }

        Ok(diagnostics)
    }

    /// Returns the current configuration, handling poisoned locks gracefully
    pub fn get_current(&self) -> Arc<Config> {
        match self.config.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Retrieves the serialized value of an option
    ///
    /// # Arguments
    /// * `path` - Dot-separated option name (e.g., "general.col.active_border")
    ///
    /// # Errors
    /// * `StoreError::InvalidPath` - If the path doesn't exist
    /// * `StoreError::Serialization` - If the config cannot be serialized
    pub fn get_by_path(&self, path: &str) -> std::result::Result<Value, StoreError> {
        let config = self.get_current();
        let config_value = to_toml(&config)?;

        navigate_path(&config_value, path)
    }

    /// Retrieves the compiled default of an option in serialized form
    ///
    /// # Errors
    /// * `StoreError::InvalidPath` - If the path doesn't exist
    pub fn get_default_by_path(&self, path: &str) -> std::result::Result<Value, StoreError> {
        get_default_for_path(path)
    }

    /// Looks up a resolved custom variable in the current configuration
    pub fn variable(&self, name: &str) -> Option<String> {
        self.get_current().variable(name).map(str::to_string)
    }

    /// Creates a stream that yields ConfigChange events matching the specified path pattern
    ///
    /// # Arguments
    /// * `pattern` - A pattern to match configuration paths (supports "*" wildcards)
    pub fn subscribe_to_path(&self, pattern: &str) -> impl Stream<Item = ConfigChange> + use<> {
        let pattern = pattern.to_string();
        let receiver = self.change_sender.subscribe();

        futures::stream::unfold(receiver, move |mut receiver| {
            let pattern = pattern.clone();
            async move {
                loop {
                    match receiver.recv().await {
                        Ok(change) => {
                            if path_matches(&change.path, &pattern) {
                                return Some((change, receiver));
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(_)) => continue,
                        Err(broadcast::error::RecvError::Closed) => return None,
                    }
                }
            }
        })
    }
}
