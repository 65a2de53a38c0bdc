//! Persistent singly-linked list.
//!
//! A [`List`] is either the empty sentinel or a cons cell holding a head
//! [`Value`] and a shared tail. Cells are reference counted and never mutated,
//! so every list produced from another one (by `cons`, `tail`, `drop`, ...)
//! shares the untouched suffix instead of copying it:
//!
//! ```text
//! xs:          1 -> 2 -> 3 -> []
//! xs.cons(0):  0 -> [1 -> 2 -> 3 -> []]   (shares every cell of xs)
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::RuntimeError;
use crate::values::{values_equal, Value};

struct Node {
    head: Value,
    tail: List,
}

#[derive(Clone, Default)]
pub struct List {
    node: Option<Arc<Node>>,
    len: usize,
}

impl List {
    pub const fn nil() -> Self {
        Self { node: None, len: 0 }
    }

    /// Prepends `head`, sharing `self` as the tail. O(1).
    pub fn cons(&self, head: Value) -> Self {
        Self::prepend(head, self.clone())
    }

    pub fn prepend(head: Value, tail: List) -> Self {
        let len = tail.len + 1;
        Self {
            node: Some(Arc::new(Node { head, tail })),
            len,
        }
    }

    pub fn singleton(value: Value) -> Self {
        Self::prepend(value, List::nil())
    }

    pub fn head(&self) -> Result<&Value, RuntimeError> {
        self.node
            .as_deref()
            .map(|node| &node.head)
            .ok_or_else(|| RuntimeError::empty_list("head"))
    }

    pub fn tail(&self) -> Result<List, RuntimeError> {
        self.node
            .as_deref()
            .map(|node| node.tail.clone())
            .ok_or_else(|| RuntimeError::empty_list("tail"))
    }

    pub fn uncons(&self) -> Option<(&Value, &List)> {
        self.node.as_deref().map(|node| (&node.head, &node.tail))
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { cursor: self }
    }

    /// True when both lists are the very same cells (or both empty).
    pub fn ptr_eq(&self, other: &List) -> bool {
        match (&self.node, &other.node) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn from_values(values: Vec<Value>) -> Self {
        Self::from_rev_onto(values, List::nil())
    }

    pub fn from_text(text: &str) -> Self {
        text.chars().map(Value::Char).collect()
    }

    /// Builds `values ++ tail`, sharing `tail`.
    pub(crate) fn from_rev_onto(values: Vec<Value>, tail: List) -> Self {
        values
            .into_iter()
            .rev()
            .fold(tail, |acc, value| List::prepend(value, acc))
    }

    /// `self ++ other`. Copies the spine of `self` only; `other` is shared.
    pub fn append(&self, other: &List) -> List {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        Self::from_rev_onto(self.to_vec(), other.clone())
    }

    pub fn reverse(&self) -> List {
        self.iter()
            .fold(List::nil(), |acc, value| List::prepend(value.clone(), acc))
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }
}

impl Drop for List {
    fn drop(&mut self) {
        // Unlink uniquely owned cells one at a time so long lists do not
        // recurse through nested destructors.
        let mut next = self.node.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.tail.node.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Iter<'a> {
    cursor: &'a List,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.node.as_deref()?;
        self.cursor = &node.tail;
        Some(&node.head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.len, Some(self.cursor.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.len == other.len
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| values_equal(left, right))
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
