//! Prefix, suffix and grouping operations.
//!
//! Every operation walks the list front to back with an explicit cursor, so
//! input length never turns into call-stack depth. Suffixes that come back
//! unchanged (`drop`, `dropWhile`, the second half of `span`) are the input's
//! own cells, not copies.

use crate::error::RuntimeError;
use crate::list::List;
use crate::typeclass::eq::is_eq;
use crate::typeclass::InstanceRegistry;
use crate::values::Value;

/// The first `n` elements; empty when `n <= 0`. Stops walking after `n`.
pub fn take(n: i64, xs: &List) -> List {
    if n <= 0 {
        return List::nil();
    }
    let n = usize::try_from(n).unwrap_or(usize::MAX);
    if n >= xs.len() {
        return xs.clone();
    }
    List::from_values(xs.iter().take(n).cloned().collect())
}

/// `xs` without its first `n` elements; `xs` itself when `n <= 0`.
pub fn drop(n: i64, xs: &List) -> List {
    let mut cursor = xs;
    let mut remaining = n;
    while remaining > 0 {
        let Some((_, tail)) = cursor.uncons() else {
            break;
        };
        cursor = tail;
        remaining -= 1;
    }
    cursor.clone()
}

/// `(take(n, xs), drop(n, xs))` in one pass.
pub fn split_at(n: i64, xs: &List) -> (List, List) {
    let mut prefix = Vec::new();
    let mut cursor = xs;
    let mut remaining = n;
    while remaining > 0 {
        let Some((x, tail)) = cursor.uncons() else {
            break;
        };
        prefix.push(x.clone());
        cursor = tail;
        remaining -= 1;
    }
    (List::from_values(prefix), cursor.clone())
}

pub fn take_while<P>(pred: P, xs: &List) -> Result<List, RuntimeError>
where
    P: FnMut(&Value) -> Result<bool, RuntimeError>,
{
    span(pred, xs).map(|(prefix, _)| prefix)
}

pub fn drop_while<P>(mut pred: P, xs: &List) -> Result<List, RuntimeError>
where
    P: FnMut(&Value) -> Result<bool, RuntimeError>,
{
    let mut cursor = xs;
    while let Some((x, tail)) = cursor.uncons() {
        if !pred(x)? {
            break;
        }
        cursor = tail;
    }
    Ok(cursor.clone())
}

/// Splits `xs` before the first element failing `pred`. The predicate is
/// evaluated once per element up to and including that one.
pub fn span<P>(mut pred: P, xs: &List) -> Result<(List, List), RuntimeError>
where
    P: FnMut(&Value) -> Result<bool, RuntimeError>,
{
    let mut prefix = Vec::new();
    let mut cursor = xs;
    while let Some((x, tail)) = cursor.uncons() {
        if !pred(x)? {
            break;
        }
        prefix.push(x.clone());
        cursor = tail;
    }
    Ok((List::from_values(prefix), cursor.clone()))
}

/// Splits `xs` before the first element satisfying `pred`.
pub fn break_<P>(mut pred: P, xs: &List) -> Result<(List, List), RuntimeError>
where
    P: FnMut(&Value) -> Result<bool, RuntimeError>,
{
    span(|x| pred(x).map(|hit| !hit), xs)
}

/// `Some(ys)` when `xs == prefix ++ ys`, compared with Eq dispatch.
pub fn strip_prefix(
    registry: &InstanceRegistry,
    prefix: &List,
    xs: &List,
) -> Result<Option<List>, RuntimeError> {
    let mut cursor = xs;
    for expected in prefix.iter() {
        let Some((actual, tail)) = cursor.uncons() else {
            return Ok(None);
        };
        if !is_eq(registry, expected, actual)? {
            return Ok(None);
        }
        cursor = tail;
    }
    Ok(Some(cursor.clone()))
}

pub fn group(registry: &InstanceRegistry, xs: &List) -> Result<List, RuntimeError> {
    group_by(|a, b| is_eq(registry, a, b), xs)
}

/// Maximal runs of adjacent elements related to the first element of their
/// run by `eq`, called as `eq(first, candidate)`. Each group is a list value.
///
/// The grouping is greedy: with a non-transitive `eq`, neighbours inside a
/// run need not be related to each other.
pub fn group_by<E>(mut eq: E, xs: &List) -> Result<List, RuntimeError>
where
    E: FnMut(&Value, &Value) -> Result<bool, RuntimeError>,
{
    let mut groups = Vec::new();
    let mut cursor = xs.clone();
    while let Some((first, rest)) = cursor.uncons() {
        let first = first.clone();
        let (run, remainder) = span(|candidate| eq(&first, candidate), rest)?;
        groups.push(Value::List(run.cons(first)));
        cursor = remainder;
    }
    Ok(List::from_values(groups))
}

#[cfg(test)]
mod tests;
