use mary::sublist::{drop, group_by, span, strip_prefix, take};
use mary::typeclass::eq::is_eq;
use mary::{InstanceRegistry, List, Runtime, RuntimeError, Value};

/// Small xorshift generator so every run checks the same inputs.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn list(&mut self, max_len: u64, range: i64) -> List {
        let len = self.next() % (max_len + 1);
        (0..len)
            .map(|_| Value::Int((self.next() % range as u64) as i64))
            .collect()
    }
}

fn inputs() -> Vec<List> {
    let mut rng = XorShift(0x9e37_79b9_7f4a_7c15);
    let mut out = vec![List::nil(), List::from_text("Mississippi")];
    out.extend((0..64).map(|_| rng.list(12, 4)));
    out
}

fn below(limit: i64) -> impl FnMut(&Value) -> Result<bool, RuntimeError> {
    move |x: &Value| match x {
        Value::Int(n) => Ok(*n < limit),
        _ => Ok(false),
    }
}

#[test]
fn take_then_drop_reconstructs_the_list() {
    for xs in inputs() {
        for n in -2..=(xs.len() as i64 + 2) {
            let rebuilt = take(n, &xs).append(&drop(n, &xs));
            assert_eq!(rebuilt, xs, "n = {n}");
        }
    }
}

#[test]
fn span_splits_at_the_first_failure() {
    for xs in inputs() {
        for limit in 0..4 {
            let (prefix, rest) = span(below(limit), &xs).unwrap();
            assert_eq!(prefix.append(&rest), xs);
            let mut pred = below(limit);
            for x in prefix.iter() {
                assert!(pred(x).unwrap());
            }
            if let Some((first, _)) = rest.uncons() {
                assert!(!pred(first).unwrap());
            }
        }
    }
}

#[test]
fn group_by_partitions_into_maximal_runs() {
    let registry = InstanceRegistry::new();
    for xs in inputs() {
        let groups = group_by(|a, b| is_eq(&registry, a, b), &xs).unwrap();
        let mut flattened = Vec::new();
        let mut previous_last: Option<Value> = None;
        for group in groups.iter() {
            let Value::List(group) = group else {
                panic!("group is not a list: {group}");
            };
            assert!(!group.is_empty());
            let items = group.to_vec();
            for pair in items.windows(2) {
                assert!(is_eq(&registry, &pair[0], &pair[1]).unwrap());
            }
            if let Some(last) = previous_last.take() {
                assert!(!is_eq(&registry, &last, &items[0]).unwrap());
            }
            previous_last = items.last().cloned();
            flattened.extend(items);
        }
        assert_eq!(List::from_values(flattened), xs);
    }
}

#[test]
fn strip_prefix_succeeds_exactly_for_prefixes() {
    let registry = InstanceRegistry::new();
    for xs in inputs() {
        for n in 0..=xs.len() as i64 {
            let prefix = take(n, &xs);
            let stripped = strip_prefix(&registry, &prefix, &xs).unwrap();
            assert_eq!(stripped, Some(drop(n, &xs)));
        }
        let longer = xs.append(&List::singleton(Value::Int(0)));
        assert_eq!(strip_prefix(&registry, &longer, &xs).unwrap(), None);
        if let Some((first, rest)) = xs.uncons() {
            let changed = match first {
                Value::Int(n) => Value::Int(n + 100),
                other => other.clone(),
            };
            let wrong = rest.cons(changed);
            if wrong != xs {
                assert_eq!(strip_prefix(&registry, &wrong, &xs).unwrap(), None);
            }
        }
    }
}

#[test]
fn concrete_scenarios_through_the_prelude() {
    let mut runtime = Runtime::new();
    let ints = |values: &[i64]| Value::list(values.iter().copied().map(Value::Int).collect());

    let xs = ints(&[1, 2, 3]);
    assert_eq!(
        runtime.call_global("take", vec![Value::Int(2), xs.clone()]).unwrap(),
        ints(&[1, 2])
    );
    assert_eq!(
        runtime.call_global("drop", vec![Value::Int(2), xs]).unwrap(),
        ints(&[3])
    );

    let greater_than = runtime.global("greaterThan").unwrap();
    let below_three = runtime.apply(greater_than, Value::Int(3)).unwrap();
    let spanned = runtime
        .call_global("span", vec![below_three, ints(&[1, 2, 3, 4, 1, 2, 3, 4])])
        .unwrap();
    assert_eq!(spanned.to_string(), "([1,2],[3,4,1,2,3,4])");

    let stripped = runtime
        .call_global("stripPrefix", vec![Value::text("foo"), Value::text("foobar")])
        .unwrap();
    assert_eq!(stripped.to_string(), r#"Just "bar""#);
    let stripped = runtime
        .call_global("stripPrefix", vec![Value::text("foo"), Value::text("barfoo")])
        .unwrap();
    assert_eq!(stripped.to_string(), "Nothing");

    let grouped = runtime
        .call_global("group", vec![Value::text("Mississippi")])
        .unwrap();
    assert_eq!(
        grouped.to_string(),
        r#"["M","i","ss","i","ss","i","pp","i"]"#
    );
}
