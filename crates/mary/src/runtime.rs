use std::sync::Arc;
use std::time::Instant;

use crate::builtins::{register_builtins, Globals};
use crate::config::RuntimeConfig;
use crate::error::RuntimeError;
use crate::typeclass::{InstanceRegistry, Instances};
use crate::values::{format_value, BuiltinImpl, BuiltinValue, Value};

/// Evaluation context: the prelude of curried builtins, the instance
/// registry for user-declared types, and tracing settings.
pub struct Runtime {
    config: RuntimeConfig,
    registry: InstanceRegistry,
    globals: Globals,
    next_call_id: u64,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            config,
            registry: InstanceRegistry::new(),
            globals: register_builtins(),
            next_call_id: 0,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn registry(&self) -> &InstanceRegistry {
        &self.registry
    }

    pub fn register_instances(&mut self, ty: &str, instances: Instances) {
        self.registry = self.registry.register(ty, instances);
    }

    pub fn global(&self, name: &str) -> Option<Value> {
        self.globals.get(name).cloned()
    }

    pub fn define(&mut self, name: &str, value: Value) {
        self.globals.insert(name.to_string(), value);
    }

    /// Looks up a prelude function and applies it to `args`.
    pub fn call_global(&mut self, name: &str, args: Vec<Value>) -> Result<Value, RuntimeError> {
        let func = self
            .global(name)
            .ok_or_else(|| RuntimeError::Message(format!("unknown function {name}")))?;
        self.call(func, args)
    }

    /// Applies one argument. Builtins collect arguments until their arity is
    /// reached, so any function may be called with fewer arguments and
    /// returns a function awaiting the rest.
    pub fn apply(&mut self, func: Value, arg: Value) -> Result<Value, RuntimeError> {
        match func {
            Value::Builtin(builtin) => self.apply_builtin(builtin, arg),
            other => Err(RuntimeError::NotCallable {
                found: format_value(&other),
            }),
        }
    }

    pub fn call(&mut self, func: Value, args: Vec<Value>) -> Result<Value, RuntimeError> {
        let mut f = func;
        for arg in args {
            f = self.apply(f, arg)?;
        }
        Ok(f)
    }

    fn apply_builtin(&mut self, builtin: BuiltinValue, arg: Value) -> Result<Value, RuntimeError> {
        let mut args = builtin.args.clone();
        args.push(arg);
        if args.len() < builtin.imp.arity {
            return Ok(Value::Builtin(BuiltinValue {
                imp: builtin.imp,
                args,
            }));
        }
        if args.len() > builtin.imp.arity {
            return Err(RuntimeError::Arity {
                name: builtin.imp.name.clone(),
                arity: builtin.imp.arity,
            });
        }
        if !self.config.trace {
            return (builtin.imp.func)(args, self);
        }
        self.run_traced(builtin.imp, args)
    }

    fn run_traced(&mut self, imp: Arc<BuiltinImpl>, args: Vec<Value>) -> Result<Value, RuntimeError> {
        let call_id = self.next_call_id;
        self.next_call_id += 1;
        let start = self.config.trace_time.then(Instant::now);

        let mut enter = serde_json::Map::new();
        enter.insert("kind".to_string(), serde_json::Value::String("builtin.enter".to_string()));
        enter.insert("fn".to_string(), serde_json::Value::String(imp.name.clone()));
        enter.insert(
            "callId".to_string(),
            serde_json::Value::Number(serde_json::Number::from(call_id)),
        );
        if self.config.trace_args {
            let args_json = args
                .iter()
                .map(|arg| debug_value_to_json(arg, self.config.show_max_items))
                .collect();
            enter.insert("args".to_string(), serde_json::Value::Array(args_json));
        }
        emit_debug_event(serde_json::Value::Object(enter));

        let result = (imp.func)(args, self);

        let mut exit = serde_json::Map::new();
        exit.insert("kind".to_string(), serde_json::Value::String("builtin.exit".to_string()));
        exit.insert("fn".to_string(), serde_json::Value::String(imp.name.clone()));
        exit.insert(
            "callId".to_string(),
            serde_json::Value::Number(serde_json::Number::from(call_id)),
        );
        exit.insert("ok".to_string(), serde_json::Value::Bool(result.is_ok()));
        if self.config.trace_args {
            match &result {
                Ok(value) => {
                    exit.insert(
                        "ret".to_string(),
                        debug_value_to_json(value, self.config.show_max_items),
                    );
                }
                Err(err) => {
                    exit.insert("error".to_string(), serde_json::Value::String(err.to_string()));
                }
            }
        }
        if let Some(start) = start {
            exit.insert(
                "durMs".to_string(),
                serde_json::Value::Number(serde_json::Number::from(
                    start.elapsed().as_millis() as u64,
                )),
            );
        }
        emit_debug_event(serde_json::Value::Object(exit));

        result
    }
}

/// Predicates must answer with a `Bool`; anything else is a dispatch error
/// attributed to `ctx`.
pub fn expect_bool(value: Value, ctx: &str) -> Result<bool, RuntimeError> {
    match value {
        Value::Bool(value) => Ok(value),
        other => Err(RuntimeError::type_mismatch(ctx, "Bool", &other)),
    }
}

fn emit_debug_event(event: serde_json::Value) {
    // JSONL on stderr, one event per line.
    if let Ok(line) = serde_json::to_string(&event) {
        eprintln!("{line}");
    }
}

pub(crate) fn debug_value_to_json(value: &Value, max_items: usize) -> serde_json::Value {
    let len = match value {
        Value::List(items) => items.len(),
        Value::Tuple(items) => items.len(),
        _ => 0,
    };
    if len > max_items {
        return serde_json::Value::String(format!("<{}:{}>", value.type_name(), len));
    }
    serde_json::Value::String(format_value(value))
}
