//! Haskell-style persistent lists, tuples and `Maybe`, with `Eq`, `Ord` and
//! `Monoid` dispatched at runtime on each value's type tag.

mod builtins;
mod config;
mod error;
mod list;
pub mod maybe;
mod runtime;
pub mod sublist;
pub mod transform;
pub mod tuple;
pub mod typeclass;
mod values;

pub use builtins::{builtin, Globals};
pub use config::RuntimeConfig;
pub use error::{MaryError, RuntimeError};
pub use list::{Iter, List};
pub use runtime::{expect_bool, Runtime};
pub use typeclass::{InstanceRegistry, Instances};
pub use values::{format_value, values_equal, BuiltinImpl, BuiltinValue, Value};
