use std::cmp::Ordering;

use super::{ensure_same_type, missing_instance, InstanceRegistry};
use crate::error::RuntimeError;
use crate::values::Value;

/// Total order dispatched on the tag of `left`.
///
/// Lists order lexicographically (a proper prefix sorts first), tuples
/// componentwise left to right, and `Nothing` before every `Just`.
pub fn compare(
    registry: &InstanceRegistry,
    left: &Value,
    right: &Value,
) -> Result<Ordering, RuntimeError> {
    ensure_same_type("compare", left, right)?;
    match (left, right) {
        (Value::Unit, Value::Unit) => Ok(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => Ok(a.total_cmp(b)),
        (Value::Char(a), Value::Char(b)) => Ok(a.cmp(b)),
        (Value::Ordering(a), Value::Ordering(b)) => Ok(a.cmp(b)),
        (Value::List(a), Value::List(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                let ordering = compare(registry, x, y)?;
                if ordering != Ordering::Equal {
                    return Ok(ordering);
                }
            }
            Ok(a.len().cmp(&b.len()))
        }
        (Value::Tuple(a), Value::Tuple(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                let ordering = compare(registry, x, y)?;
                if ordering != Ordering::Equal {
                    return Ok(ordering);
                }
            }
            Ok(Ordering::Equal)
        }
        (Value::Maybe(a), Value::Maybe(b)) => match (a, b) {
            (None, None) => Ok(Ordering::Equal),
            (None, Some(_)) => Ok(Ordering::Less),
            (Some(_), None) => Ok(Ordering::Greater),
            (Some(x), Some(y)) => compare(registry, x, y),
        },
        (Value::Constructor { ty, .. }, _) => {
            let ord = registry
                .get(ty)
                .and_then(|instances| instances.ord.clone())
                .ok_or_else(|| missing_instance("compare", "Ord", left))?;
            ord(registry, left, right)
        }
        _ => Err(missing_instance("compare", "Ord", left)),
    }
}

pub fn lt(registry: &InstanceRegistry, left: &Value, right: &Value) -> Result<bool, RuntimeError> {
    Ok(compare(registry, left, right)? == Ordering::Less)
}

pub fn le(registry: &InstanceRegistry, left: &Value, right: &Value) -> Result<bool, RuntimeError> {
    Ok(compare(registry, left, right)? != Ordering::Greater)
}

pub fn gt(registry: &InstanceRegistry, left: &Value, right: &Value) -> Result<bool, RuntimeError> {
    Ok(compare(registry, left, right)? == Ordering::Greater)
}

pub fn ge(registry: &InstanceRegistry, left: &Value, right: &Value) -> Result<bool, RuntimeError> {
    Ok(compare(registry, left, right)? != Ordering::Less)
}

/// The larger operand; `right` when they compare equal.
pub fn max(registry: &InstanceRegistry, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    if le(registry, left, right)? {
        Ok(right.clone())
    } else {
        Ok(left.clone())
    }
}

/// The smaller operand; `left` when they compare equal.
pub fn min(registry: &InstanceRegistry, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    if le(registry, left, right)? {
        Ok(left.clone())
    } else {
        Ok(right.clone())
    }
}
