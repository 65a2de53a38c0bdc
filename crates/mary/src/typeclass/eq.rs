use std::cmp::Ordering;

use super::{ensure_same_type, missing_instance, InstanceRegistry};
use crate::error::RuntimeError;
use crate::values::Value;

/// Structural equality dispatched on the tag of `left`.
///
/// Compound values compare element by element through their own instances.
/// Lists of different length are unequal without inspecting elements.
pub fn is_eq(registry: &InstanceRegistry, left: &Value, right: &Value) -> Result<bool, RuntimeError> {
    ensure_same_type("isEq", left, right)?;
    match (left, right) {
        (Value::Unit, Value::Unit) => Ok(true),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Int(a), Value::Int(b)) => Ok(a == b),
        // Same total order as `compare`: NaN equals itself, -0.0 differs from 0.0.
        (Value::Float(a), Value::Float(b)) => Ok(a.total_cmp(b) == Ordering::Equal),
        (Value::Char(a), Value::Char(b)) => Ok(a == b),
        (Value::Ordering(a), Value::Ordering(b)) => Ok(a == b),
        (Value::List(a), Value::List(b)) => {
            if a.ptr_eq(b) {
                return Ok(true);
            }
            if a.len() != b.len() {
                return Ok(false);
            }
            for (x, y) in a.iter().zip(b.iter()) {
                if !is_eq(registry, x, y)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Value::Tuple(a), Value::Tuple(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                if !is_eq(registry, x, y)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Value::Maybe(a), Value::Maybe(b)) => match (a, b) {
            (None, None) => Ok(true),
            (Some(x), Some(y)) => is_eq(registry, x, y),
            _ => Ok(false),
        },
        (Value::Constructor { ty, .. }, _) => {
            let eq = registry
                .get(ty)
                .and_then(|instances| instances.eq.clone())
                .ok_or_else(|| missing_instance("isEq", "Eq", left))?;
            eq(registry, left, right)
        }
        _ => Err(missing_instance("isEq", "Eq", left)),
    }
}

pub fn is_not_eq(
    registry: &InstanceRegistry,
    left: &Value,
    right: &Value,
) -> Result<bool, RuntimeError> {
    is_eq(registry, left, right).map(|equal| !equal)
}
