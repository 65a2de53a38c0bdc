use std::cmp::Ordering;
use std::sync::Arc;

use super::{ensure_same_type, missing_instance, InstanceRegistry};
use crate::error::RuntimeError;
use crate::list::List;
use crate::values::Value;

/// The identity element of `value`'s monoid.
///
/// For a tuple this is the tuple of each component's identity, which keeps
/// `mappend(mempty(t), t) == t` true for every tuple of monoids.
pub fn mempty(registry: &InstanceRegistry, value: &Value) -> Result<Value, RuntimeError> {
    match value {
        Value::Unit => Ok(Value::Unit),
        Value::Ordering(_) => Ok(Value::Ordering(Ordering::Equal)),
        Value::List(_) => Ok(Value::List(List::nil())),
        Value::Maybe(_) => Ok(Value::Maybe(None)),
        Value::Tuple(items) => {
            let empties = items
                .iter()
                .map(|item| mempty(registry, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Tuple(Arc::new(empties)))
        }
        Value::Constructor { ty, .. } => registry
            .get(ty)
            .and_then(|instances| instances.monoid.as_ref())
            .map(|monoid| monoid.empty.clone())
            .ok_or_else(|| missing_instance("mempty", "Monoid", value)),
        _ => Err(missing_instance("mempty", "Monoid", value)),
    }
}

/// Combines two values of the same monoid.
pub fn mappend(
    registry: &InstanceRegistry,
    left: &Value,
    right: &Value,
) -> Result<Value, RuntimeError> {
    ensure_same_type("mappend", left, right)?;
    match (left, right) {
        (Value::Unit, Value::Unit) => Ok(Value::Unit),
        (Value::Ordering(Ordering::Equal), Value::Ordering(_)) => Ok(right.clone()),
        (Value::Ordering(_), Value::Ordering(_)) => Ok(left.clone()),
        (Value::List(a), Value::List(b)) => Ok(Value::List(a.append(b))),
        (Value::Maybe(a), Value::Maybe(b)) => match (a, b) {
            (None, _) => Ok(right.clone()),
            (_, None) => Ok(left.clone()),
            (Some(x), Some(y)) => Ok(Value::Maybe(Some(Arc::new(mappend(registry, x, y)?)))),
        },
        (Value::Tuple(a), Value::Tuple(b)) => {
            let combined = a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| mappend(registry, x, y))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Tuple(Arc::new(combined)))
        }
        (Value::Constructor { ty, .. }, _) => {
            let monoid = registry
                .get(ty)
                .and_then(|instances| instances.monoid.as_ref())
                .ok_or_else(|| missing_instance("mappend", "Monoid", left))?;
            (monoid.append)(registry, left, right)
        }
        _ => Err(missing_instance("mappend", "Monoid", left)),
    }
}

/// Right fold of [`mappend`] over `values`, seeded with the identity of the
/// first element's monoid. An empty list has no element to take the
/// identity from and is rejected.
pub fn mconcat(registry: &InstanceRegistry, values: &List) -> Result<Value, RuntimeError> {
    let first = values
        .head()
        .map_err(|_| RuntimeError::empty_list("mconcat"))?;
    let mut acc = mempty(registry, first)?;
    for value in values.to_vec().iter().rev() {
        acc = mappend(registry, value, &acc)?;
    }
    Ok(acc)
}

/// [`mconcat`] over any foldable container: a `List`, or a `Maybe` holding
/// at most one monoid. `Just x` folds to `x`; `Nothing` has no element to
/// take the identity from and is rejected like an empty list.
pub fn mconcat_foldable(registry: &InstanceRegistry, container: &Value) -> Result<Value, RuntimeError> {
    match container {
        Value::List(values) => mconcat(registry, values),
        Value::Maybe(Some(inner)) => mappend(registry, inner, &mempty(registry, inner)?),
        Value::Maybe(None) => Err(RuntimeError::empty_list("mconcat")),
        other => Err(RuntimeError::type_mismatch("mconcat", "List or Maybe", other)),
    }
}
