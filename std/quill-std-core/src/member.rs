//!
//! Member Access
//!
//! `dot(receiver, member)` is what compiled `receiver.member` expressions
//! call. It never returns a raw missing indicator:
//!
//! - a callable result is bound to `receiver`, so calling it later sees the
//!   receiver as `this` no matter where the call happens
//! - a missing member, or one holding host null, reads as `nil`
//! - anything else is returned unchanged
//!
//! Lookups on structured values always succeed. The only failure is reading
//! a member off `nil` itself that nil does not declare, which surfaces as a
//! `PropertyLookupError` at the exact access that misused the absent value.
//!
//! Members per kind:
//! - Object: own members, record protocol slots, entry iterator
//! - Map: `size`, `get`, `has`, record protocol slots, entry iterator
//! - Str / List: `length`
//! - Keyword: `value` (its name)
//! - Function: `name`
//!

use std::sync::LazyLock;

use crate::error::PropertyLookupError;
use crate::function::Function;
use crate::nil::Nil;
use crate::object::ObjectLiteral;
use crate::property::{Capability, PropertyKey};
use crate::record::protocol_slot;
use crate::value::{MapKey, Value, ValueMap};

static ENTRIES: LazyLock<Function> = LazyLock::new(|| {
    Function::new("entries", |this, _args| {
        Ok(match this {
            Value::Object(object) => object.entries(),
            Value::Map(map) => Value::list(
                map.iter()
                    .map(|(key, value)| Value::list([Value::from(key.clone()), value.clone()])),
            ),
            _ => Value::Nil,
        })
    })
});

static MAP_GET: LazyLock<Function> = LazyLock::new(|| {
    Function::new("get", |this, args| {
        let found = match (this, args.first()) {
            (Value::Map(map), Some(key)) => MapKey::from_value(key).and_then(|key| map.get(&key).cloned()),
            _ => None,
        };
        Ok(found.unwrap_or(Value::Nil))
    })
});

static MAP_HAS: LazyLock<Function> = LazyLock::new(|| {
    Function::new("has", |this, args| {
        let found = match (this, args.first()) {
            (Value::Map(map), Some(key)) => MapKey::from_value(key).is_some_and(|key| map.contains_key(&key)),
            _ => false,
        };
        Ok(Value::Bool(found))
    })
});

/// Read `member` from `receiver`
pub fn dot(receiver: &Value, member: impl Into<PropertyKey>) -> Result<Value, PropertyLookupError> {
    let member = member.into();
    let found = match receiver {
        Value::Nil | Value::Null => return Nil.get(&member),
        Value::Object(object) => object_member(object, &member),
        Value::Map(map) => map_member(map, &member),
        Value::Str(s) => length_member(&member, s.chars().count()),
        Value::List(items) => length_member(&member, items.len()),
        Value::Keyword(keyword) => match member.as_name() {
            Some("value") => Some(Value::from(keyword.as_str())),
            _ => None,
        },
        Value::Function(function) => match member.as_name() {
            Some("name") => Some(Value::from(function.name())),
            _ => None,
        },
        Value::Bool(_) | Value::Int(_) | Value::Float(_) => None,
    };
    Ok(match found {
        Some(Value::Function(function)) => Value::Function(function.bind(receiver)),
        Some(Value::Null) | None => Value::Nil,
        Some(value) => value,
    })
}

fn object_member(object: &ObjectLiteral, member: &PropertyKey) -> Option<Value> {
    match member {
        PropertyKey::Name(name) => object.get(name).cloned(),
        PropertyKey::Capability(capability) => capability_member(*capability),
    }
}

fn map_member(map: &ValueMap, member: &PropertyKey) -> Option<Value> {
    match member {
        PropertyKey::Name(name) => match name.as_ref() {
            "size" => Some(Value::from(map.len())),
            "get" => Some(Value::Function(MAP_GET.clone())),
            "has" => Some(Value::Function(MAP_HAS.clone())),
            _ => None,
        },
        PropertyKey::Capability(capability) => capability_member(*capability),
    }
}

fn capability_member(capability: Capability) -> Option<Value> {
    match capability {
        Capability::RecordKeys | Capability::RecordValues => {
            protocol_slot(capability).cloned().map(Value::Function)
        }
        Capability::Iterator => Some(Value::Function(ENTRIES.clone())),
        Capability::TypeTag => None,
    }
}

fn length_member(member: &PropertyKey, len: usize) -> Option<Value> {
    match member.as_name() {
        Some("length") => Some(Value::from(len)),
        _ => None,
    }
}
