//! Unit tests for config_store module
//! No filesystem, timing, or external dependencies.

#![allow(clippy::panic)]

use futures::StreamExt;
use toml::Value;

use crate::config::{Config, loading::Overrides, variables::VariableTable};
use crate::config_store::{
    ConfigChange, ConfigStore, StoreError, diff_configs,
    path_ops::{navigate_path, path_matches},
};

fn built(pairs: &[(&str, &str)]) -> Config {
    let overrides: Overrides = pairs.iter().copied().collect();
    match Config::build(&overrides, &VariableTable::new()) {
        Ok((config, _)) => config,
        Err(e) => panic!("build failed: {e}"),
    }
}

#[test]
fn config_change_new() {
    let change = ConfigChange::new(
        "general.layout".to_string(),
        Some(Value::String("dwindle".to_string())),
        Some(Value::String("master".to_string())),
    );

    assert_eq!(change.path, "general.layout");
    assert_eq!(change.as_string().as_deref(), Some("master"));
    assert!(!change.is_removal());
    assert!(change.timestamp.elapsed().as_secs() < 1);
}

#[test]
fn config_change_extract() {
    let change = ConfigChange::new(
        "general.border_size".to_string(),
        Some(Value::Integer(1)),
        Some(Value::Integer(4)),
    );
    assert_eq!(change.extract::<i64>(), Ok(4));
    assert!(matches!(
        change.extract::<String>(),
        Err(StoreError::TypeMismatch { .. })
    ));

    let removal = ConfigChange::new(
        "variables.accent".to_string(),
        Some(Value::String("ff0000".to_string())),
        None,
    );
    assert!(removal.is_removal());
    assert!(removal.extract::<String>().is_err());
}

#[test]
fn path_patterns() {
    assert!(path_matches("general.border_size", "*"));
    assert!(path_matches("general.border_size", "general.border_size"));
    assert!(path_matches("decoration.blur.size", "decoration.*"));
    assert!(path_matches("decoration.blur.size", "*.blur.size"));
    assert!(path_matches("decoration.blur.size", "decoration"));
    assert!(!path_matches("decoration.blur.size", "general.*"));
    assert!(!path_matches("general", "general.border_size"));
}

#[test]
fn navigate_handles_dotted_keys() {
    let document: Value = match toml::from_str(
        r#"
        [general]
        border_size = 2
        "col.active_border" = { angle = 45.0, stops = [1, 2] }
        "#,
    ) {
        Ok(value) => value,
        Err(e) => panic!("invalid test document: {e}"),
    };

    assert_eq!(
        navigate_path(&document, "general.border_size"),
        Ok(Value::Integer(2))
    );
    assert_eq!(
        navigate_path(&document, "general.col.active_border.angle"),
        Ok(Value::Float(45.0))
    );
    assert_eq!(
        navigate_path(&document, "general.col.active_border.stops.1"),
        Ok(Value::Integer(2))
    );
    assert!(matches!(
        navigate_path(&document, "general.col.missing"),
        Err(StoreError::InvalidPath(_))
    ));
    assert!(matches!(
        navigate_path(&document, "general.border_size.deeper"),
        Err(StoreError::InvalidPath(_))
    ));
    assert!(navigate_path(&document, "").is_err());
}

#[test]
fn diff_of_identical_configs_is_empty() {
    let config = built(&[("general.border_size", "3")]);

    match diff_configs(&config, &config.clone()) {
        Ok(changes) => assert!(changes.is_empty()),
        Err(e) => panic!("diff failed: {e}"),
    }
}

#[test]
fn diff_reports_one_change_per_option() {
    let old = Config::default();
    let new = built(&[
        ("general.border_size", "3"),
        ("general.col.active_border", "ff0000 00ff00 45deg"),
        ("decoration.blur.passes", "4"),
    ]);

    let changes = match diff_configs(&old, &new) {
        Ok(changes) => changes,
        Err(e) => panic!("diff failed: {e}"),
    };
    let paths: Vec<&str> = changes.iter().map(|c| c.path.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "general.border_size",
            "general.col.active_border",
            "decoration.blur.passes",
        ]
    );
    assert_eq!(changes[0].old_value, Some(Value::Integer(1)));
    assert_eq!(changes[0].new_value, Some(Value::Integer(3)));
}

#[test]
fn diff_reports_variable_changes() {
    let mut old = Config::default();
    old.variables.insert("gone".to_string(), "1".to_string());
    old.variables.insert("kept".to_string(), "2".to_string());

    let mut new = Config::default();
    new.variables.insert("kept".to_string(), "3".to_string());
    new.variables.insert("fresh".to_string(), "4".to_string());

    let changes = match diff_configs(&old, &new) {
        Ok(changes) => changes,
        Err(e) => panic!("diff failed: {e}"),
    };
    let summary: Vec<(&str, bool, bool)> = changes
        .iter()
        .map(|c| (c.path.as_str(), c.old_value.is_some(), c.new_value.is_some()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("variables.fresh", false, true),
            ("variables.gone", true, false),
            ("variables.kept", true, true),
        ]
    );
}

#[test]
fn store_error_converts_to_crate_error() {
    let error: crate::HyprconfError = StoreError::InvalidPath("nowhere".to_string()).into();
    assert!(matches!(error, crate::HyprconfError::Store { .. }));
}

#[tokio::test]
async fn config_store_with_defaults() {
    let store = ConfigStore::with_defaults();

    assert_eq!(*store.get_current(), Config::default());
    assert_eq!(store.get_by_path("general.border_size"), Ok(Value::Integer(1)));
    assert_eq!(
        store.get_by_path("input.kb_layout"),
        Ok(Value::String("us".to_string()))
    );
}

#[tokio::test]
async fn config_store_clone_shares_state() {
    let store1 = ConfigStore::with_defaults();
    let store2 = store1.clone();

    let overrides: Overrides = [("misc.vrr", "2")].into_iter().collect();
    if let Err(e) = store1.reload(&overrides, &VariableTable::new()) {
        panic!("reload failed: {e}");
    }

    assert_eq!(store2.get_current().misc.vrr, 2);
}

#[tokio::test]
async fn reload_swaps_whole_object() {
    let store = ConfigStore::with_defaults();
    let before = store.get_current();

    let overrides: Overrides = [("general.border_size", "6")].into_iter().collect();
    let diagnostics = match store.reload(&overrides, &VariableTable::new()) {
        Ok(diagnostics) => diagnostics,
        Err(e) => panic!("reload failed: {e}"),
    };

    assert!(diagnostics.is_empty());
    assert_eq!(before.general.border_size, 1);
    assert_eq!(store.get_current().general.border_size, 6);
    assert_eq!(
        store.get_default_by_path("general.border_size"),
        Ok(Value::Integer(1))
    );
}

#[tokio::test]
async fn subscription_receives_matching_changes() {
    let store = ConfigStore::with_defaults();
    let mut decoration = Box::pin(store.subscribe_to_path("decoration.*"));

    let overrides: Overrides = [("general.border_size", "2"), ("decoration.rounding", "8")]
        .into_iter()
        .collect();
    if let Err(e) = store.reload(&overrides, &VariableTable::new()) {
        panic!("reload failed: {e}");
    }

    let Some(change) = decoration.next().await else {
        panic!("stream ended");
    };
    assert_eq!(change.path, "decoration.rounding");
    assert_eq!(change.new_value, Some(Value::Integer(8)));
}

#[tokio::test]
async fn variable_lookup_follows_reload() {
    let store = ConfigStore::with_defaults();
    assert_eq!(store.variable("accent"), None);

    let variables: VariableTable = [("accent", "ff0000")].into_iter().collect();
    if let Err(e) = store.reload(&Overrides::new(), &variables) {
        panic!("reload failed: {e}");
    }

    assert_eq!(store.variable("$accent").as_deref(), Some("ff0000"));
}
