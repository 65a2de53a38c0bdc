use std::sync::Arc;

use crate::error::RuntimeError;
use crate::runtime::Runtime;
use crate::values::Value;

pub fn just(value: Value) -> Value {
    Value::Maybe(Some(Arc::new(value)))
}

pub fn nothing() -> Value {
    Value::Maybe(None)
}

pub fn from_option(value: Option<Value>) -> Value {
    Value::Maybe(value.map(Arc::new))
}

pub(crate) fn expect_maybe<'a>(
    value: &'a Value,
    ctx: &str,
) -> Result<Option<&'a Value>, RuntimeError> {
    match value {
        Value::Maybe(inner) => Ok(inner.as_deref()),
        other => Err(RuntimeError::type_mismatch(ctx, "Maybe", other)),
    }
}

pub fn is_just(value: &Value) -> Result<bool, RuntimeError> {
    Ok(expect_maybe(value, "isJust")?.is_some())
}

pub fn is_nothing(value: &Value) -> Result<bool, RuntimeError> {
    Ok(expect_maybe(value, "isNothing")?.is_none())
}

/// The payload of a `Just`, or `default` for `Nothing`.
pub fn from_maybe(default: &Value, value: &Value) -> Result<Value, RuntimeError> {
    Ok(expect_maybe(value, "fromMaybe")?
        .cloned()
        .unwrap_or_else(|| default.clone()))
}

/// Applies `func` to the payload of a `Just`, or returns `default`.
pub fn maybe(
    runtime: &mut Runtime,
    default: &Value,
    func: &Value,
    value: &Value,
) -> Result<Value, RuntimeError> {
    match expect_maybe(value, "maybe")? {
        Some(inner) => runtime.apply(func.clone(), inner.clone()),
        None => Ok(default.clone()),
    }
}
