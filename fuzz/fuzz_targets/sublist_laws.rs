#![no_main]

use libfuzzer_sys::fuzz_target;
use mary::sublist::{drop, group, span, split_at, strip_prefix, take};
use mary::{InstanceRegistry, List, RuntimeError, Value};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 || data.len() > 4 * 1024 {
        return;
    }
    // First byte picks the split point and predicate bound; the rest is the list.
    let n = i64::from(data[0] as i8);
    let bound = data[0] % 8;
    let xs: List = data[1..]
        .iter()
        .map(|byte| Value::Int(i64::from(byte % 8)))
        .collect();
    let registry = InstanceRegistry::new();

    let prefix = take(n, &xs);
    let suffix = drop(n, &xs);
    assert_eq!(prefix.append(&suffix), xs);
    assert_eq!(split_at(n, &xs), (prefix.clone(), suffix.clone()));
    assert_eq!(strip_prefix(&registry, &prefix, &xs), Ok(Some(suffix)));

    let below = |x: &Value| {
        Ok::<_, RuntimeError>(matches!(x, Value::Int(v) if *v < i64::from(bound)))
    };
    let (front, back) = span(below, &xs).expect("predicate never fails");
    assert_eq!(front.append(&back), xs);

    let groups = group(&registry, &xs).expect("ints are comparable");
    let mut flattened = Vec::with_capacity(xs.len());
    for run in groups.iter() {
        let Value::List(run) = run else {
            panic!("group produced a non-list");
        };
        assert!(!run.is_empty());
        flattened.extend(run.iter().cloned());
    }
    assert_eq!(List::from_values(flattened), xs);
});
