use std::cmp::Ordering;
use std::sync::Arc;

use im::HashMap as ImHashMap;

use super::{eq, missing_instance, ord};
use crate::error::RuntimeError;
use crate::values::Value;

pub type EqFn =
    dyn Fn(&InstanceRegistry, &Value, &Value) -> Result<bool, RuntimeError> + Send + Sync;
pub type OrdFn =
    dyn Fn(&InstanceRegistry, &Value, &Value) -> Result<Ordering, RuntimeError> + Send + Sync;
pub type AppendFn =
    dyn Fn(&InstanceRegistry, &Value, &Value) -> Result<Value, RuntimeError> + Send + Sync;

#[derive(Clone)]
pub struct MonoidInstance {
    pub empty: Value,
    pub append: Arc<AppendFn>,
}

/// The typeclass instances one user-declared type provides.
#[derive(Clone, Default)]
pub struct Instances {
    pub eq: Option<Arc<EqFn>>,
    pub ord: Option<Arc<OrdFn>>,
    pub monoid: Option<MonoidInstance>,
}

impl Instances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Structural Eq and Ord, like a `deriving (Eq, Ord)` clause: constructors
    /// order by their position in `constructors`, then by arguments left to
    /// right using the arguments' own instances.
    pub fn derived(constructors: &[&str]) -> Self {
        let order: Arc<Vec<String>> =
            Arc::new(constructors.iter().map(|name| name.to_string()).collect());
        let ord_order = order.clone();
        Self::new()
            .with_eq(move |registry, left, right| {
                let (a, aa) = constructor_parts("isEq", &order, left)?;
                let (b, bb) = constructor_parts("isEq", &order, right)?;
                if a != b || aa.len() != bb.len() {
                    return Ok(false);
                }
                for (x, y) in aa.iter().zip(bb.iter()) {
                    if !eq::is_eq(registry, x, y)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            })
            .with_ord(move |registry, left, right| {
                let (a, aa) = constructor_parts("compare", &ord_order, left)?;
                let (b, bb) = constructor_parts("compare", &ord_order, right)?;
                if a != b {
                    return Ok(a.cmp(&b));
                }
                for (x, y) in aa.iter().zip(bb.iter()) {
                    let ordering = ord::compare(registry, x, y)?;
                    if ordering != Ordering::Equal {
                        return Ok(ordering);
                    }
                }
                Ok(aa.len().cmp(&bb.len()))
            })
    }

    pub fn with_eq(
        mut self,
        eq: impl Fn(&InstanceRegistry, &Value, &Value) -> Result<bool, RuntimeError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.eq = Some(Arc::new(eq));
        self
    }

    pub fn with_ord(
        mut self,
        ord: impl Fn(&InstanceRegistry, &Value, &Value) -> Result<Ordering, RuntimeError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.ord = Some(Arc::new(ord));
        self
    }

    pub fn with_monoid(
        mut self,
        empty: Value,
        append: impl Fn(&InstanceRegistry, &Value, &Value) -> Result<Value, RuntimeError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.monoid = Some(MonoidInstance {
            empty,
            append: Arc::new(append),
        });
        self
    }
}

fn constructor_parts<'a>(
    op: &str,
    order: &[String],
    value: &'a Value,
) -> Result<(usize, &'a [Value]), RuntimeError> {
    let Value::Constructor { name, args, .. } = value else {
        return Err(missing_instance(op, "Constructor", value));
    };
    let index = order
        .iter()
        .position(|candidate| candidate == name)
        .ok_or_else(|| RuntimeError::type_mismatch(op, "a declared constructor", value))?;
    Ok((index, args.as_slice()))
}

/// Instances for user-declared types, keyed by type name.
///
/// The map is persistent: [`InstanceRegistry::register`] returns a new
/// registry sharing everything already registered, so cloning one to hand
/// to a closure is cheap.
#[derive(Clone, Default)]
pub struct InstanceRegistry {
    types: ImHashMap<String, Instances>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, ty: &str, instances: Instances) -> Self {
        Self {
            types: self.types.update(ty.to_string(), instances),
        }
    }

    pub fn get(&self, ty: &str) -> Option<&Instances> {
        self.types.get(ty)
    }

    pub fn contains(&self, ty: &str) -> bool {
        self.types.contains_key(ty)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
