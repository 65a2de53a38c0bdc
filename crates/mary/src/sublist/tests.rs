use super::*;
use crate::maybe::just;

fn ints(values: &[i64]) -> List {
    values.iter().copied().map(Value::Int).collect()
}

fn below(limit: i64) -> impl FnMut(&Value) -> Result<bool, RuntimeError> {
    move |value: &Value| match value {
        Value::Int(n) => Ok(*n < limit),
        other => Err(RuntimeError::type_mismatch("below", "Int", other)),
    }
}

#[test]
fn take_and_drop_on_small_lists() {
    let xs = ints(&[1, 2, 3]);
    assert_eq!(take(2, &xs), ints(&[1, 2]));
    assert_eq!(drop(2, &xs), ints(&[3]));
    assert_eq!(take(0, &xs), List::nil());
    assert_eq!(take(-4, &xs), List::nil());
    assert_eq!(take(10, &xs), xs);
    assert_eq!(drop(10, &xs), List::nil());
}

#[test]
fn drop_shares_the_suffix() {
    let xs = ints(&[1, 2, 3]);
    assert!(drop(0, &xs).ptr_eq(&xs));
    assert!(drop(-1, &xs).ptr_eq(&xs));
    assert!(drop(1, &xs).ptr_eq(&xs.tail().unwrap()));
}

#[test]
fn split_at_matches_take_and_drop() {
    let xs = ints(&[1, 2, 3, 4]);
    for n in -1..6 {
        let (prefix, rest) = split_at(n, &xs);
        assert_eq!(prefix, take(n, &xs));
        assert_eq!(rest, drop(n, &xs));
    }
}

#[test]
fn span_splits_at_first_failure() {
    let xs = ints(&[1, 2, 3, 4, 1, 2, 3, 4]);
    let (prefix, rest) = span(below(3), &xs).unwrap();
    assert_eq!(prefix, ints(&[1, 2]));
    assert_eq!(rest, ints(&[3, 4, 1, 2, 3, 4]));
    assert_eq!(take_while(below(3), &xs).unwrap(), ints(&[1, 2]));
    assert_eq!(drop_while(below(3), &xs).unwrap(), ints(&[3, 4, 1, 2, 3, 4]));
}

#[test]
fn span_stops_calling_the_predicate_after_the_split() {
    let xs = ints(&[1, 5, 1, 1]);
    let mut calls = 0;
    let (prefix, _) = span(
        |value: &Value| {
            calls += 1;
            Ok(matches!(value, Value::Int(n) if *n < 3))
        },
        &xs,
    )
    .unwrap();
    assert_eq!(prefix, ints(&[1]));
    assert_eq!(calls, 2);
}

#[test]
fn break_splits_at_first_match() {
    let xs = ints(&[1, 2, 3, 4, 1, 2, 3, 4]);
    let (prefix, rest) = break_(|value: &Value| Ok(matches!(value, Value::Int(n) if *n > 3)), &xs).unwrap();
    assert_eq!(prefix, ints(&[1, 2, 3]));
    assert_eq!(rest, ints(&[4, 1, 2, 3, 4]));
}

#[test]
fn predicate_errors_propagate() {
    let xs = List::from_text("ab");
    assert!(span(below(3), &xs).is_err());
    assert!(drop_while(below(3), &xs).is_err());
}

#[test]
fn strip_prefix_on_text() {
    let registry = InstanceRegistry::new();
    let foo = List::from_text("foo");
    assert_eq!(
        strip_prefix(&registry, &foo, &List::from_text("foobar")).unwrap(),
        Some(List::from_text("bar"))
    );
    assert_eq!(
        strip_prefix(&registry, &foo, &List::from_text("foo")).unwrap(),
        Some(List::nil())
    );
    assert_eq!(
        strip_prefix(&registry, &foo, &List::from_text("barfoo")).unwrap(),
        None
    );
    assert_eq!(strip_prefix(&registry, &foo, &List::from_text("fo")).unwrap(), None);
}

#[test]
fn strip_prefix_with_empty_prefix_returns_input() {
    let registry = InstanceRegistry::new();
    let xs = ints(&[1, 2]);
    let out = strip_prefix(&registry, &List::nil(), &xs).unwrap().unwrap();
    assert!(out.ptr_eq(&xs));
}

#[test]
fn strip_prefix_compares_structurally() {
    let registry = InstanceRegistry::new();
    let prefix = List::singleton(just(Value::list(vec![Value::Int(1)])));
    let xs = List::from_values(vec![
        just(Value::list(vec![Value::Int(1)])),
        Value::Maybe(None),
    ]);
    assert_eq!(
        strip_prefix(&registry, &prefix, &xs).unwrap(),
        Some(List::singleton(Value::Maybe(None)))
    );
}

#[test]
fn group_mississippi() {
    let registry = InstanceRegistry::new();
    let groups = group(&registry, &List::from_text("Mississippi")).unwrap();
    let expected: List = ["M", "i", "ss", "i", "ss", "i", "pp", "i"]
        .iter()
        .map(|run| Value::text(run))
        .collect();
    assert_eq!(groups, expected);
}

#[test]
fn group_by_uses_the_run_head() {
    let xs = ints(&[1, 2, 3, 7, 8, 20]);
    let groups = group_by(
        |first: &Value, candidate: &Value| match (first, candidate) {
            (Value::Int(a), Value::Int(b)) => Ok(b - a < 3),
            _ => Ok(false),
        },
        &xs,
    )
    .unwrap();
    let expected = List::from_values(vec![
        Value::List(ints(&[1, 2, 3])),
        Value::List(ints(&[7, 8])),
        Value::List(ints(&[20])),
    ]);
    assert_eq!(groups, expected);
}

#[test]
fn group_of_empty_is_empty() {
    let registry = InstanceRegistry::new();
    assert!(group(&registry, &List::nil()).unwrap().is_empty());
}

#[test]
fn long_lists_are_walked_iteratively() {
    let xs: List = (0..200_000).map(|n| Value::Int(n / 1000)).collect();
    let registry = InstanceRegistry::new();
    let groups = group(&registry, &xs).unwrap();
    assert_eq!(groups.len(), 200);
    assert_eq!(drop(199_999, &xs).len(), 1);
}
