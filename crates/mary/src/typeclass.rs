//! Eq, Ord and Monoid dispatch.
//!
//! Built-in tags are resolved by exhaustive matching on [`Value`]; values of
//! user-declared types (`Value::Constructor`) are resolved through an
//! [`InstanceRegistry`]. Operands that disagree in tag, tuples of different
//! arity, and types without the required instance are all reported as
//! `TypeMismatch` rather than answered with `false`.

pub mod eq;
pub mod monoid;
pub mod ord;
mod registry;


use crate::error::RuntimeError;
use crate::values::Value;

pub use registry::{AppendFn, EqFn, InstanceRegistry, Instances, MonoidInstance, OrdFn};

pub(crate) fn ensure_same_type(op: &str, left: &Value, right: &Value) -> Result<(), RuntimeError> {
    if left.type_name() != right.type_name() {
        return Err(RuntimeError::type_mismatch(op, left.type_name(), right));
    }
    if let (Value::Tuple(a), Value::Tuple(b)) = (left, right) {
        if a.len() != b.len() {
            return Err(RuntimeError::type_mismatch(
                op,
                &format!("Tuple of arity {}", a.len()),
                right,
            ));
        }
    }
    Ok(())
}

pub(crate) fn missing_instance(op: &str, class: &str, value: &Value) -> RuntimeError {
    RuntimeError::type_mismatch(op, &format!("{class} instance"), value)
}
