//!
//! Object Literals
//!
//! An `ObjectLiteral` is the record value compiled from `{ key: value, ... }`
//! syntax. It is built once from an ordered sequence of pairs and not mutated
//! afterwards. Members keep the order in which their keys first appeared; a
//! repeated key replaces the earlier value in place.
//!

use std::sync::Arc;

use indexmap::IndexMap;

use crate::value::Value;

#[derive(Debug, Clone, Default)]
pub struct ObjectLiteral {
    pub(crate) members: IndexMap<Arc<str>, Value>,
}

impl ObjectLiteral {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(key, value)` pairs in order
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Arc<str>>,
        V: Into<Value>,
    {
        let mut members = IndexMap::new();
        for (key, value) in entries {
            members.insert(key.into(), value.into());
        }
        Self { members }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// `(key, value)` pairs in installation order. Each call starts over.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.members.iter(),
        }
    }

    /// Entries as a list of `[key, value]` lists
    pub fn entries(&self) -> Value {
        Value::list(
            self.members
                .iter()
                .map(|(key, value)| Value::list([Value::Str(key.clone()), value.clone()])),
        )
    }
}

impl<K: Into<Arc<str>>, V: Into<Value>> FromIterator<(K, V)> for ObjectLiteral {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, Arc<str>, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_ref(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ObjectLiteral {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
