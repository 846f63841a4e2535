//! Reactive configuration store with change tracking.
//!
//! Holds the current configuration behind a single shared reference,
//! swaps it atomically on reload and notifies subscribers of every option
//! that changed.

mod changes;
mod diff;
mod path_ops;
mod store;

#[cfg(test)]
mod tests;

pub use changes::{ConfigChange, StoreError};
pub use diff::diff_configs;
pub use store::ConfigStore;
