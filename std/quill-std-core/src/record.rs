//!
//! Record Protocol
//!
//! `Record` gives generated iteration helpers one way to enumerate keys and
//! values regardless of whether they hold an object literal or a native map.
//!
//! - Statically, through the `Record` trait (implemented for `ObjectLiteral`
//!   and any `IndexMap` whose keys and values convert into `Value`)
//! - Dynamically, through `record_keys` / `record_values`, or by reading the
//!   `Capability::RecordKeys` / `Capability::RecordValues` member with `dot`
//!
//! Another aggregate kind joins the protocol by implementing both trait
//! methods and answering both capability ids in member access.
//!

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::function::Function;
use crate::object::ObjectLiteral;
use crate::property::Capability;
use crate::value::Value;

pub trait Record {
    /// Keys in enumeration order; each call starts a fresh pass
    fn keys(&self) -> impl Iterator<Item = Value> + '_;

    /// Values in the same order as `keys`
    fn values(&self) -> impl Iterator<Item = Value> + '_;
}

impl Record for ObjectLiteral {
    fn keys(&self) -> impl Iterator<Item = Value> + '_ {
        self.members.keys().cloned().map(Value::Str)
    }

    fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.members.values().cloned()
    }
}

impl<K, V, S> Record for IndexMap<K, V, S>
where
    K: Clone + Into<Value>,
    V: Clone + Into<Value>,
{
    fn keys(&self) -> impl Iterator<Item = Value> + '_ {
        IndexMap::keys(self).cloned().map(Into::into)
    }

    fn values(&self) -> impl Iterator<Item = Value> + '_ {
        IndexMap::values(self).cloned().map(Into::into)
    }
}

/// Keys of any record value, `None` if the value is not a record
pub fn record_keys(value: &Value) -> Option<Vec<Value>> {
    match value {
        Value::Object(object) => Some(Record::keys(object.as_ref()).collect()),
        Value::Map(map) => Some(Record::keys(map.as_ref()).collect()),
        _ => None,
    }
}

/// Values of any record value, `None` if the value is not a record
pub fn record_values(value: &Value) -> Option<Vec<Value>> {
    match value {
        Value::Object(object) => Some(Record::values(object.as_ref()).collect()),
        Value::Map(map) => Some(Record::values(map.as_ref()).collect()),
        _ => None,
    }
}

static RECORD_KEYS: LazyLock<Function> = LazyLock::new(|| {
    Function::new("keys", |this, _args| {
        Ok(record_keys(this).map(Value::list).unwrap_or(Value::Nil))
    })
});

static RECORD_VALUES: LazyLock<Function> = LazyLock::new(|| {
    Function::new("values", |this, _args| {
        Ok(record_values(this).map(Value::list).unwrap_or(Value::Nil))
    })
});

/// The unbound operation stored in a record protocol slot
pub(crate) fn protocol_slot(capability: Capability) -> Option<&'static Function> {
    match capability {
        Capability::RecordKeys => Some(&*RECORD_KEYS),
        Capability::RecordValues => Some(&*RECORD_VALUES),
        Capability::Iterator | Capability::TypeTag => None,
    }
}
