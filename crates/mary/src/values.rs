use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::error::RuntimeError;
use crate::list::List;
use crate::runtime::Runtime;

pub type BuiltinFunc = dyn Fn(Vec<Value>, &mut Runtime) -> Result<Value, RuntimeError> + Send + Sync;

/// A runtime value. The variant is the value's type tag; every typeclass
/// operation dispatches on it.
#[derive(Clone)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    Ordering(Ordering),
    List(List),
    /// Fixed-arity product, arity >= 2. Build with [`crate::tuple::tuple`].
    Tuple(Arc<Vec<Value>>),
    Maybe(Option<Arc<Value>>),
    /// User-declared data. `ty` names the type whose registered instances
    /// answer Eq/Ord/Monoid for it; `name` is the constructor.
    Constructor {
        ty: String,
        name: String,
        args: Vec<Value>,
    },
    Builtin(BuiltinValue),
}

#[derive(Clone)]
pub struct BuiltinValue {
    pub imp: Arc<BuiltinImpl>,
    pub args: Vec<Value>,
}

pub struct BuiltinImpl {
    pub name: String,
    pub arity: usize,
    pub func: Arc<BuiltinFunc>,
}

impl Value {
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(List::from_values(items))
    }

    /// A string as a list of `Char`.
    pub fn text(text: &str) -> Self {
        Value::List(List::from_text(text))
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::Unit => "Unit",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Char(_) => "Char",
            Value::Ordering(_) => "Ordering",
            Value::List(_) => "List",
            Value::Tuple(_) => "Tuple",
            Value::Maybe(_) => "Maybe",
            Value::Constructor { ty, .. } => ty,
            Value::Builtin(_) => "Function",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, Value::Tuple(_))
    }

    pub fn is_maybe(&self) -> bool {
        matches!(self, Value::Maybe(_))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Builtin(_))
    }
}

/// Structural equality that never fails: values with different tags are
/// simply unequal and functions never compare equal. The dispatching,
/// tag-checked comparison is [`crate::typeclass::eq::is_eq`].
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Unit, Value::Unit) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a.total_cmp(b) == Ordering::Equal,
        (Value::Char(a), Value::Char(b)) => a == b,
        (Value::Ordering(a), Value::Ordering(b)) => a == b,
        (Value::List(a), Value::List(b)) => a == b,
        (Value::Tuple(a), Value::Tuple(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(left, right)| values_equal(left, right))
        }
        (Value::Maybe(a), Value::Maybe(b)) => match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => values_equal(a, b),
            _ => false,
        },
        (
            Value::Constructor {
                ty: ta,
                name: a,
                args: aa,
            },
            Value::Constructor {
                ty: tb,
                name: b,
                args: bb,
            },
        ) => {
            ta == tb
                && a == b
                && aa.len() == bb.len()
                && aa.iter().zip(bb.iter()).all(|(x, y)| values_equal(x, y))
        }
        _ => false,
    }
}

/// Renders a value the way Haskell's `show` would.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Unit => "()".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Int(v) => v.to_string(),
        Value::Float(v) => format!("{v:?}"),
        Value::Char(c) => format!("{c:?}"),
        Value::Ordering(Ordering::Less) => "LT".to_string(),
        Value::Ordering(Ordering::Equal) => "EQ".to_string(),
        Value::Ordering(Ordering::Greater) => "GT".to_string(),
        Value::List(items) => {
            if !items.is_empty() && items.iter().all(|item| matches!(item, Value::Char(_))) {
                let text: String = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::Char(c) => Some(*c),
                        _ => None,
                    })
                    .collect();
                return format!("{text:?}");
            }
            let inner = items.iter().map(format_value).collect::<Vec<_>>().join(",");
            format!("[{inner}]")
        }
        Value::Tuple(items) => {
            let inner = items.iter().map(format_value).collect::<Vec<_>>().join(",");
            format!("({inner})")
        }
        Value::Maybe(None) => "Nothing".to_string(),
        Value::Maybe(Some(inner)) => format!("Just {}", format_atom(inner)),
        Value::Constructor { name, args, .. } => {
            if args.is_empty() {
                name.clone()
            } else {
                let inner = args.iter().map(format_atom).collect::<Vec<_>>().join(" ");
                format!("{name} {inner}")
            }
        }
        Value::Builtin(b) => format!("<builtin {}>", b.imp.name),
    }
}

/// Like [`format_value`], parenthesised when the rendering would otherwise
/// be ambiguous as a constructor argument.
fn format_atom(value: &Value) -> String {
    let needs_parens = match value {
        Value::Int(v) => *v < 0,
        Value::Float(v) => v.is_sign_negative(),
        Value::Maybe(Some(_)) => true,
        Value::Constructor { args, .. } => !args.is_empty(),
        _ => false,
    };
    let text = format_value(value);
    if needs_parens {
        format!("({text})")
    } else {
        text
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        values_equal(self, other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_value(self))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_value(self))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}
