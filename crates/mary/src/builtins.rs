use std::sync::Arc;

use im::HashMap as ImHashMap;

use crate::error::RuntimeError;
use crate::list::List;
use crate::maybe::{self, from_option};
use crate::runtime::{expect_bool, Runtime};
use crate::transform::expect_list;
use crate::typeclass::{eq, monoid, ord};
use crate::values::{BuiltinImpl, BuiltinValue, Value};
use crate::{sublist, transform, tuple};

pub type Globals = ImHashMap<String, Value>;

pub fn builtin(
    name: &str,
    arity: usize,
    func: impl Fn(Vec<Value>, &mut Runtime) -> Result<Value, RuntimeError> + Send + Sync + 'static,
) -> Value {
    Value::Builtin(BuiltinValue {
        imp: Arc::new(BuiltinImpl {
            name: name.to_string(),
            arity,
            func: Arc::new(func),
        }),
        args: Vec::new(),
    })
}

fn define(env: &mut Globals, value: Value) {
    if let Value::Builtin(builtin) = &value {
        env.insert(builtin.imp.name.clone(), value.clone());
    }
}

fn alias(env: &mut Globals, alias: &str, name: &str) {
    if let Some(value) = env.get(name).cloned() {
        env.insert(alias.to_string(), value);
    }
}

/// Destructures a saturated argument vector.
fn take_args<const N: usize>(args: Vec<Value>, name: &str) -> Result<[Value; N], RuntimeError> {
    <[Value; N]>::try_from(args).map_err(|_| RuntimeError::Arity {
        name: name.to_string(),
        arity: N,
    })
}

fn expect_int(value: &Value, ctx: &str) -> Result<i64, RuntimeError> {
    match value {
        Value::Int(value) => Ok(*value),
        other => Err(RuntimeError::type_mismatch(ctx, "Int", other)),
    }
}

fn expect_callable(value: Value, ctx: &str) -> Result<Value, RuntimeError> {
    if value.is_callable() {
        Ok(value)
    } else {
        Err(RuntimeError::type_mismatch(ctx, "a function", &value))
    }
}

fn predicate<'a>(
    runtime: &'a mut Runtime,
    pred: &'a Value,
    ctx: &'a str,
) -> impl FnMut(&Value) -> Result<bool, RuntimeError> + 'a {
    move |x: &Value| {
        let out = runtime.apply(pred.clone(), x.clone())?;
        expect_bool(out, ctx)
    }
}

fn relation<'a>(
    runtime: &'a mut Runtime,
    rel: &'a Value,
    ctx: &'a str,
) -> impl FnMut(&Value, &Value) -> Result<bool, RuntimeError> + 'a {
    move |a: &Value, b: &Value| {
        let out = runtime.call(rel.clone(), vec![a.clone(), b.clone()])?;
        expect_bool(out, ctx)
    }
}

fn pair_of_lists(first: List, second: List) -> Value {
    tuple::pair(Value::List(first), Value::List(second))
}

pub(crate) fn register_builtins() -> Globals {
    let mut env = Globals::new();
    register_list_builtins(&mut env);
    register_sublist_builtins(&mut env);
    register_transform_builtins(&mut env);
    register_tuple_builtins(&mut env);
    register_maybe_builtins(&mut env);
    register_class_builtins(&mut env);
    register_function_builtins(&mut env);
    env
}

fn register_list_builtins(env: &mut Globals) {
    define(
        env,
        builtin("cons", 2, |args, _| {
            let [x, xs] = take_args(args, "cons")?;
            let xs = expect_list(&xs, "cons")?;
            Ok(Value::List(xs.cons(x)))
        }),
    );
    define(
        env,
        builtin("head", 1, |args, _| {
            let [xs] = take_args(args, "head")?;
            Ok(expect_list(&xs, "head")?.head()?.clone())
        }),
    );
    define(
        env,
        builtin("tail", 1, |args, _| {
            let [xs] = take_args(args, "tail")?;
            Ok(Value::List(expect_list(&xs, "tail")?.tail()?))
        }),
    );
    define(
        env,
        builtin("isEmpty", 1, |args, _| {
            let [xs] = take_args(args, "isEmpty")?;
            Ok(Value::Bool(expect_list(&xs, "isEmpty")?.is_empty()))
        }),
    );
    define(
        env,
        builtin("isList", 1, |args, _| {
            let [value] = take_args(args, "isList")?;
            Ok(Value::Bool(value.is_list()))
        }),
    );
    define(
        env,
        builtin("length", 1, |args, _| {
            let [xs] = take_args(args, "length")?;
            let len = expect_list(&xs, "length")?.len();
            Ok(Value::Int(i64::try_from(len).unwrap_or(i64::MAX)))
        }),
    );
    define(
        env,
        builtin("append", 2, |args, _| {
            let [xs, ys] = take_args(args, "append")?;
            let xs = expect_list(&xs, "append")?;
            let ys = expect_list(&ys, "append")?;
            Ok(Value::List(xs.append(ys)))
        }),
    );
    alias(env, "++", "append");
}

fn register_sublist_builtins(env: &mut Globals) {
    define(
        env,
        builtin("take", 2, |args, _| {
            let [n, xs] = take_args(args, "take")?;
            let n = expect_int(&n, "take")?;
            Ok(Value::List(sublist::take(n, expect_list(&xs, "take")?)))
        }),
    );
    define(
        env,
        builtin("drop", 2, |args, _| {
            let [n, xs] = take_args(args, "drop")?;
            let n = expect_int(&n, "drop")?;
            Ok(Value::List(sublist::drop(n, expect_list(&xs, "drop")?)))
        }),
    );
    define(
        env,
        builtin("splitAt", 2, |args, _| {
            let [n, xs] = take_args(args, "splitAt")?;
            let n = expect_int(&n, "splitAt")?;
            let (prefix, rest) = sublist::split_at(n, expect_list(&xs, "splitAt")?);
            Ok(pair_of_lists(prefix, rest))
        }),
    );
    define(
        env,
        builtin("takeWhile", 2, |args, runtime| {
            let [pred, xs] = take_args(args, "takeWhile")?;
            let xs = expect_list(&xs, "takeWhile")?;
            let pred = expect_callable(pred, "takeWhile")?;
            let out = sublist::take_while(predicate(runtime, &pred, "takeWhile"), xs)?;
            Ok(Value::List(out))
        }),
    );
    define(
        env,
        builtin("dropWhile", 2, |args, runtime| {
            let [pred, xs] = take_args(args, "dropWhile")?;
            let xs = expect_list(&xs, "dropWhile")?;
            let pred = expect_callable(pred, "dropWhile")?;
            let out = sublist::drop_while(predicate(runtime, &pred, "dropWhile"), xs)?;
            Ok(Value::List(out))
        }),
    );
    define(
        env,
        builtin("span", 2, |args, runtime| {
            let [pred, xs] = take_args(args, "span")?;
            let xs = expect_list(&xs, "span")?;
            let pred = expect_callable(pred, "span")?;
            let (prefix, rest) = sublist::span(predicate(runtime, &pred, "span"), xs)?;
            Ok(pair_of_lists(prefix, rest))
        }),
    );
    define(
        env,
        builtin("break", 2, |args, runtime| {
            let [pred, xs] = take_args(args, "break")?;
            let xs = expect_list(&xs, "break")?;
            let pred = expect_callable(pred, "break")?;
            let (prefix, rest) = sublist::break_(predicate(runtime, &pred, "break"), xs)?;
            Ok(pair_of_lists(prefix, rest))
        }),
    );
    alias(env, "spanNot", "break");
    define(
        env,
        builtin("stripPrefix", 2, |args, runtime| {
            let [prefix, xs] = take_args(args, "stripPrefix")?;
            let prefix = expect_list(&prefix, "stripPrefix")?;
            let xs = expect_list(&xs, "stripPrefix")?;
            let out = sublist::strip_prefix(runtime.registry(), prefix, xs)?;
            Ok(from_option(out.map(Value::List)))
        }),
    );
    define(
        env,
        builtin("group", 1, |args, runtime| {
            let [xs] = take_args(args, "group")?;
            let xs = expect_list(&xs, "group")?;
            Ok(Value::List(sublist::group(runtime.registry(), xs)?))
        }),
    );
    define(
        env,
        builtin("groupBy", 2, |args, runtime| {
            let [rel, xs] = take_args(args, "groupBy")?;
            let xs = expect_list(&xs, "groupBy")?;
            let rel = expect_callable(rel, "groupBy")?;
            let out = sublist::group_by(relation(runtime, &rel, "groupBy"), xs)?;
            Ok(Value::List(out))
        }),
    );
}

fn register_transform_builtins(env: &mut Globals) {
    define(
        env,
        builtin("map", 2, |args, runtime| {
            let [func, xs] = take_args(args, "map")?;
            let xs = expect_list(&xs, "map")?;
            let func = expect_callable(func, "map")?;
            let out = transform::map(|x| runtime.apply(func.clone(), x.clone()), xs)?;
            Ok(Value::List(out))
        }),
    );
    define(
        env,
        builtin("reverse", 1, |args, _| {
            let [xs] = take_args(args, "reverse")?;
            Ok(Value::List(transform::reverse(expect_list(&xs, "reverse")?)))
        }),
    );
    define(
        env,
        builtin("intersperse", 2, |args, _| {
            let [sep, xs] = take_args(args, "intersperse")?;
            let xs = expect_list(&xs, "intersperse")?;
            Ok(Value::List(transform::intersperse(&sep, xs)?))
        }),
    );
    define(
        env,
        builtin("intercalate", 2, |args, _| {
            let [sep, xss] = take_args(args, "intercalate")?;
            let sep = expect_list(&sep, "intercalate")?;
            let xss = expect_list(&xss, "intercalate")?;
            Ok(Value::List(transform::intercalate(sep, xss)?))
        }),
    );
    define(
        env,
        builtin("transpose", 1, |args, _| {
            let [xss] = take_args(args, "transpose")?;
            Ok(Value::List(transform::transpose(expect_list(&xss, "transpose")?)?))
        }),
    );
    define(
        env,
        builtin("concat", 1, |args, _| {
            let [xss] = take_args(args, "concat")?;
            Ok(Value::List(transform::concat(expect_list(&xss, "concat")?)?))
        }),
    );
    define(
        env,
        builtin("ap", 2, |args, runtime| {
            let [funcs, xs] = take_args(args, "ap")?;
            let funcs = expect_list(&funcs, "ap")?;
            let xs = expect_list(&xs, "ap")?;
            let out = transform::ap(|f, x| runtime.apply(f.clone(), x.clone()), funcs, xs)?;
            Ok(Value::List(out))
        }),
    );
}

fn register_tuple_builtins(env: &mut Globals) {
    define(
        env,
        builtin("pair", 2, |args, _| {
            let [first, second] = take_args(args, "pair")?;
            Ok(tuple::pair(first, second))
        }),
    );
    define(
        env,
        builtin("fst", 1, |args, _| {
            let [value] = take_args(args, "fst")?;
            tuple::fst(&value)
        }),
    );
    define(
        env,
        builtin("snd", 1, |args, _| {
            let [value] = take_args(args, "snd")?;
            tuple::snd(&value)
        }),
    );
    define(
        env,
        builtin("swap", 1, |args, _| {
            let [value] = take_args(args, "swap")?;
            tuple::swap(&value)
        }),
    );
    define(
        env,
        builtin("curry", 3, |args, runtime| {
            let [func, first, second] = take_args(args, "curry")?;
            tuple::curry(runtime, &func, first, second)
        }),
    );
    define(
        env,
        builtin("uncurry", 2, |args, runtime| {
            let [func, value] = take_args(args, "uncurry")?;
            tuple::uncurry(runtime, &func, &value)
        }),
    );
}

fn register_maybe_builtins(env: &mut Globals) {
    define(
        env,
        builtin("just", 1, |args, _| {
            let [value] = take_args(args, "just")?;
            Ok(maybe::just(value))
        }),
    );
    env.insert("Nothing".to_string(), maybe::nothing());
    define(
        env,
        builtin("isJust", 1, |args, _| {
            let [value] = take_args(args, "isJust")?;
            maybe::is_just(&value).map(Value::Bool)
        }),
    );
    define(
        env,
        builtin("isNothing", 1, |args, _| {
            let [value] = take_args(args, "isNothing")?;
            maybe::is_nothing(&value).map(Value::Bool)
        }),
    );
    define(
        env,
        builtin("fromMaybe", 2, |args, _| {
            let [default, value] = take_args(args, "fromMaybe")?;
            maybe::from_maybe(&default, &value)
        }),
    );
    define(
        env,
        builtin("maybe", 3, |args, runtime| {
            let [default, func, value] = take_args(args, "maybe")?;
            maybe::maybe(runtime, &default, &func, &value)
        }),
    );
}

fn register_class_builtins(env: &mut Globals) {
    define(
        env,
        builtin("isEq", 2, |args, runtime| {
            let [a, b] = take_args(args, "isEq")?;
            eq::is_eq(runtime.registry(), &a, &b).map(Value::Bool)
        }),
    );
    define(
        env,
        builtin("isNotEq", 2, |args, runtime| {
            let [a, b] = take_args(args, "isNotEq")?;
            eq::is_not_eq(runtime.registry(), &a, &b).map(Value::Bool)
        }),
    );
    define(
        env,
        builtin("compare", 2, |args, runtime| {
            let [a, b] = take_args(args, "compare")?;
            ord::compare(runtime.registry(), &a, &b).map(Value::Ordering)
        }),
    );
    define(
        env,
        builtin("lessThan", 2, |args, runtime| {
            let [a, b] = take_args(args, "lessThan")?;
            ord::lt(runtime.registry(), &a, &b).map(Value::Bool)
        }),
    );
    define(
        env,
        builtin("lessThanOrEqual", 2, |args, runtime| {
            let [a, b] = take_args(args, "lessThanOrEqual")?;
            ord::le(runtime.registry(), &a, &b).map(Value::Bool)
        }),
    );
    define(
        env,
        builtin("greaterThan", 2, |args, runtime| {
            let [a, b] = take_args(args, "greaterThan")?;
            ord::gt(runtime.registry(), &a, &b).map(Value::Bool)
        }),
    );
    define(
        env,
        builtin("greaterThanOrEqual", 2, |args, runtime| {
            let [a, b] = take_args(args, "greaterThanOrEqual")?;
            ord::ge(runtime.registry(), &a, &b).map(Value::Bool)
        }),
    );
    define(
        env,
        builtin("max", 2, |args, runtime| {
            let [a, b] = take_args(args, "max")?;
            ord::max(runtime.registry(), &a, &b)
        }),
    );
    define(
        env,
        builtin("min", 2, |args, runtime| {
            let [a, b] = take_args(args, "min")?;
            ord::min(runtime.registry(), &a, &b)
        }),
    );
    define(
        env,
        builtin("mempty", 1, |args, runtime| {
            let [value] = take_args(args, "mempty")?;
            monoid::mempty(runtime.registry(), &value)
        }),
    );
    define(
        env,
        builtin("mappend", 2, |args, runtime| {
            let [a, b] = take_args(args, "mappend")?;
            monoid::mappend(runtime.registry(), &a, &b)
        }),
    );
    define(
        env,
        builtin("mconcat", 1, |args, runtime| {
            let [xs] = take_args(args, "mconcat")?;
            monoid::mconcat_foldable(runtime.registry(), &xs)
        }),
    );
}

fn register_function_builtins(env: &mut Globals) {
    define(
        env,
        builtin("not", 1, |args, _| {
            let [value] = take_args(args, "not")?;
            Ok(Value::Bool(!expect_bool(value, "not")?))
        }),
    );
    define(
        env,
        builtin("id", 1, |args, _| {
            let [value] = take_args(args, "id")?;
            Ok(value)
        }),
    );
    define(
        env,
        builtin("constant", 2, |args, _| {
            let [value, _ignored] = take_args(args, "constant")?;
            Ok(value)
        }),
    );
    define(
        env,
        builtin("flip", 3, |args, runtime| {
            let [func, a, b] = take_args(args, "flip")?;
            runtime.call(func, vec![b, a])
        }),
    );
    define(
        env,
        builtin("compose", 3, |args, runtime| {
            let [f, g, x] = take_args(args, "compose")?;
            let inner = runtime.apply(g, x)?;
            runtime.apply(f, inner)
        }),
    );
    alias(env, "$", "compose");
}
