use std::cmp::Ordering;

use mary::maybe::{just, nothing};
use mary::tuple::{pair, tuple};
use mary::typeclass::monoid::{mappend, mconcat, mempty};
use mary::{InstanceRegistry, Instances, List, Runtime, RuntimeError, Value};

fn ints(values: &[i64]) -> Value {
    Value::list(values.iter().copied().map(Value::Int).collect())
}

fn sum(n: i64) -> Value {
    Value::Constructor {
        ty: "Sum".to_string(),
        name: "Sum".to_string(),
        args: vec![Value::Int(n)],
    }
}

fn sum_registry() -> InstanceRegistry {
    let instances = Instances::derived(&["Sum"]).with_monoid(sum(0), |_, left, right| {
        match (left, right) {
            (
                Value::Constructor { args: a, .. },
                Value::Constructor { args: b, .. },
            ) => match (a.as_slice(), b.as_slice()) {
                ([Value::Int(a)], [Value::Int(b)]) => Ok(sum(a + b)),
                _ => Err(RuntimeError::from("Sum holds one Int")),
            },
            _ => Err(RuntimeError::from("Sum expected")),
        }
    });
    InstanceRegistry::new().register("Sum", instances)
}

/// Triples of values from one monoid, used for identity and associativity.
fn families() -> Vec<[Value; 3]> {
    vec![
        [Value::Unit, Value::Unit, Value::Unit],
        [ints(&[1, 2]), ints(&[]), ints(&[3])],
        [Value::text("ab"), Value::text("c"), Value::text("")],
        [
            Value::Ordering(Ordering::Equal),
            Value::Ordering(Ordering::Less),
            Value::Ordering(Ordering::Greater),
        ],
        [just(ints(&[1])), nothing(), just(ints(&[2, 3]))],
        [nothing(), nothing(), just(Value::text("x"))],
        [
            pair(ints(&[1]), Value::Ordering(Ordering::Equal)),
            pair(ints(&[]), Value::Ordering(Ordering::Greater)),
            pair(ints(&[2]), Value::Ordering(Ordering::Less)),
        ],
        [
            tuple(vec![Value::Unit, nothing(), ints(&[1])]).unwrap(),
            tuple(vec![Value::Unit, just(ints(&[7])), ints(&[])]).unwrap(),
            tuple(vec![Value::Unit, just(ints(&[8])), ints(&[2])]).unwrap(),
        ],
        [sum(1), sum(-4), sum(10)],
    ]
}

#[test]
fn mempty_is_a_two_sided_identity() {
    let registry = sum_registry();
    for family in families() {
        for x in &family {
            let empty = mempty(&registry, x).unwrap();
            assert_eq!(mappend(&registry, &empty, x).unwrap(), *x, "left identity for {x}");
            assert_eq!(mappend(&registry, x, &empty).unwrap(), *x, "right identity for {x}");
        }
    }
}

#[test]
fn mappend_is_associative() {
    let registry = sum_registry();
    for [a, b, c] in families() {
        let left = mappend(&registry, &mappend(&registry, &a, &b).unwrap(), &c).unwrap();
        let right = mappend(&registry, &a, &mappend(&registry, &b, &c).unwrap()).unwrap();
        assert_eq!(left, right, "associativity for {a}, {b}, {c}");
    }
}

#[test]
fn mconcat_folds_every_family() {
    let registry = sum_registry();
    for [a, b, c] in families() {
        let expected = mappend(&registry, &a, &mappend(&registry, &b, &c).unwrap()).unwrap();
        let values = List::from_values(vec![a, b, c]);
        assert_eq!(mconcat(&registry, &values).unwrap(), expected);
    }
}

#[test]
fn mconcat_of_nothing_is_an_error() {
    let registry = InstanceRegistry::new();
    let err = mconcat(&registry, &List::nil()).unwrap_err();
    assert_eq!(err, RuntimeError::empty_list("mconcat"));
}

#[test]
fn mconcat_through_the_prelude() {
    let mut runtime = Runtime::new();
    let rows = Value::list(vec![ints(&[1, 2, 3]), ints(&[4, 5, 6]), ints(&[7, 8, 9])]);
    let out = runtime.call_global("mconcat", vec![rows]).unwrap();
    assert_eq!(out, ints(&[1, 2, 3, 4, 5, 6, 7, 8, 9]));
}

#[test]
fn registered_monoid_is_reachable_from_the_prelude() {
    let mut runtime = Runtime::new();
    let err = runtime
        .call_global("mappend", vec![sum(1), sum(2)])
        .unwrap_err();
    assert!(matches!(err, RuntimeError::TypeMismatch { .. }));

    runtime.register_instances("Sum", sum_registry().get("Sum").cloned().unwrap());
    let out = runtime
        .call_global("mconcat", vec![Value::list(vec![sum(1), sum(2), sum(3)])])
        .unwrap();
    assert_eq!(out, sum(6));
}
