//! Unit tests for variable substitution.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use crate::config::{
    error::ValueError,
    variables::{MAX_DEPTH, MAX_EXPANDED_LEN, VariableTable},
};

#[test]
fn substitutes_single_reference() {
    let mut table = VariableTable::new();
    table.define("accent", "ff0000");

    assert_eq!(table.resolve("$accent").unwrap(), "ff0000");
}

#[test]
fn substitutes_inside_surrounding_text() {
    let table: VariableTable = [("a", "ff0000"), ("b", "00ff00")].into_iter().collect();

    assert_eq!(table.resolve("$a $b 45deg").unwrap(), "ff0000 00ff00 45deg");
    assert_eq!(table.resolve("rgb($a)").unwrap(), "rgb(ff0000)");
}

#[test]
fn text_without_references_is_unchanged() {
    let table = VariableTable::new();

    assert_eq!(table.resolve("5,10").unwrap(), "5,10");
    assert_eq!(table.resolve("cost $5").unwrap(), "cost $5");
    assert_eq!(table.resolve("$").unwrap(), "$");
}

#[test]
fn define_overwrites_and_strips_prefix() {
    let mut table = VariableTable::new();
    table.define("gap", "5");
    table.define("$gap", "10");

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("gap"), Some("10"));
    assert_eq!(table.resolve("$gap").unwrap(), "10");
}

#[test]
fn nested_bindings_resolve_recursively() {
    let table: VariableTable = [("base", "5"), ("double", "$base,$base"), ("gaps", "$double")]
        .into_iter()
        .collect();

    assert_eq!(table.resolve("$gaps").unwrap(), "5,5");
    assert_eq!(table.resolve_variable("double").unwrap(), "5,5");
}

#[test]
fn undefined_reference_fails() {
    let table = VariableTable::new();

    assert_eq!(
        table.resolve("$missing"),
        Err(ValueError::UndefinedVariable {
            name: "missing".to_string()
        })
    );
}

#[test]
fn cycles_are_detected() {
    let table: VariableTable = [("a", "$b"), ("b", "$a")].into_iter().collect();

    let Err(ValueError::CyclicVariable { chain }) = table.resolve("$a") else {
        panic!("expected a cycle error");
    };
    assert_eq!(chain, vec!["a", "b", "a"]);

    assert!(matches!(
        table.resolve_variable("b"),
        Err(ValueError::CyclicVariable { .. })
    ));
}

#[test]
fn self_reference_is_a_cycle() {
    let table: VariableTable = [("loop", "x $loop")].into_iter().collect();

    assert!(matches!(
        table.resolve("$loop"),
        Err(ValueError::CyclicVariable { .. })
    ));
}

#[test]
fn repeated_use_is_not_a_cycle() {
    let table: VariableTable = [("c", "ff0000"), ("pair", "$c $c")].into_iter().collect();

    assert_eq!(table.resolve("$pair $c").unwrap(), "ff0000 ff0000 ff0000");
}

#[test]
fn deep_chains_hit_the_depth_limit() {
    let table: VariableTable = (0..MAX_DEPTH + 10)
        .map(|i| (format!("v{i}"), format!("$v{}", i + 1)))
        .collect();

    assert!(matches!(
        table.resolve("$v0"),
        Err(ValueError::RecursionLimit { depth: MAX_DEPTH, .. })
    ));
}

#[test]
fn chains_within_the_limit_resolve() {
    let mut table: VariableTable = (0..10)
        .map(|i| (format!("v{i}"), format!("$v{}", i + 1)))
        .collect();
    table.define("v10", "done");

    assert_eq!(table.resolve("$v0").unwrap(), "done");
}

#[test]
fn resolve_all_splits_successes_and_failures() {
    let table: VariableTable = [("ok", "1"), ("a", "$b"), ("b", "$a"), ("lost", "$nope")]
        .into_iter()
        .collect();

    let (resolved, failures) = table.resolve_all();

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved.get("ok").map(String::as_str), Some("1"));

    let failed: Vec<&str> = failures.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(failed, vec!["a", "b", "lost"]);
}

fn doubling_table(levels: usize) -> VariableTable {
    let mut table = VariableTable::new();
    table.define("l0", "ff0000");
    for level in 1..levels {
        let previous = level - 1;
        table.define(format!("l{level}"), format!("$l{previous} $l{previous}"));
    }
    table
}

#[test]
fn doubling_bindings_stop_at_the_size_limit() {
    let table = doubling_table(30);

    let (resolved, failures) = table.resolve_all();

    // l13 is 57343 bytes, l14 would be 114687
    assert_eq!(resolved.len(), 14);
    assert_eq!(resolved.get("l13").map(String::len), Some(57_343));
    assert!(resolved.values().all(|value| value.len() <= MAX_EXPANDED_LEN));

    assert_eq!(failures.len(), 16);
    for (name, error) in &failures {
        assert!(
            matches!(error, ValueError::ExpansionLimit { limit: MAX_EXPANDED_LEN, .. }),
            "{name}: {error}"
        );
    }
}

#[test]
fn oversized_value_fails_without_oversized_bindings() {
    let table = doubling_table(14);

    assert_eq!(table.resolve("$l13").map(|value| value.len()), Ok(57_343));
    assert_eq!(
        table.resolve("$l13 $l13"),
        Err(ValueError::ExpansionLimit {
            name: "l13".to_string(),
            limit: MAX_EXPANDED_LEN,
        })
    );
}

#[test]
fn resolver_reuses_expanded_bindings() {
    let table = doubling_table(10);
    let mut resolver = table.resolver();

    let first = resolver.resolve("$l9").unwrap();
    let again = resolver.resolve("$l9").unwrap();

    assert_eq!(first, again);
    assert_eq!(first, table.resolve("$l9").unwrap());
    assert_eq!(resolver.resolve("x$l0").unwrap(), "xff0000");
}

#[test]
fn cached_bindings_keep_the_depth_limit() {
    let mut table: VariableTable = (0..70)
        .map(|i| (format!("v{i}"), format!("$v{}", i + 1)))
        .collect();
    table.define("v70", "done");
    let mut resolver = table.resolver();

    assert_eq!(resolver.resolve_variable("v20").unwrap(), "done");
    assert!(matches!(
        resolver.resolve_variable("v0"),
        Err(ValueError::RecursionLimit { depth: MAX_DEPTH, .. })
    ));
    assert_eq!(resolver.resolve_variable("v20"), table.resolve_variable("v20"));
}
