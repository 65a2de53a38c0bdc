use std::sync::Arc;

use crate::error::RuntimeError;
use crate::runtime::Runtime;
use crate::values::Value;

/// Builds a tuple. Arity is fixed here and is part of the tuple's type.
pub fn tuple(values: Vec<Value>) -> Result<Value, RuntimeError> {
    if values.len() < 2 {
        return Err(RuntimeError::TypeMismatch {
            op: "tuple".to_string(),
            expected: "at least 2 components".to_string(),
            found: format!("{} components", values.len()),
        });
    }
    Ok(Value::Tuple(Arc::new(values)))
}

pub fn pair(first: Value, second: Value) -> Value {
    Value::Tuple(Arc::new(vec![first, second]))
}

pub fn unit() -> Value {
    Value::Unit
}

pub(crate) fn expect_pair<'a>(value: &'a Value, ctx: &str) -> Result<(&'a Value, &'a Value), RuntimeError> {
    match value {
        Value::Tuple(items) if items.len() == 2 => Ok((&items[0], &items[1])),
        other => Err(RuntimeError::type_mismatch(ctx, "Tuple of arity 2", other)),
    }
}

pub fn fst(value: &Value) -> Result<Value, RuntimeError> {
    expect_pair(value, "fst").map(|(first, _)| first.clone())
}

pub fn snd(value: &Value) -> Result<Value, RuntimeError> {
    expect_pair(value, "snd").map(|(_, second)| second.clone())
}

pub fn swap(value: &Value) -> Result<Value, RuntimeError> {
    let (first, second) = expect_pair(value, "swap")?;
    Ok(pair(second.clone(), first.clone()))
}

/// Calls a function of one pair argument with two separate arguments.
pub fn curry(
    runtime: &mut Runtime,
    func: &Value,
    first: Value,
    second: Value,
) -> Result<Value, RuntimeError> {
    runtime.apply(func.clone(), pair(first, second))
}

/// Calls a curried binary function with the components of a pair.
pub fn uncurry(runtime: &mut Runtime, func: &Value, value: &Value) -> Result<Value, RuntimeError> {
    let (first, second) = expect_pair(value, "uncurry")?;
    runtime.call(func.clone(), vec![first.clone(), second.clone()])
}
