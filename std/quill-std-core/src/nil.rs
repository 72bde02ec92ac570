///
/// Nil - the absence sentinel.
///
/// Member access hands back `nil` for anything missing, so chains of lookups
/// never fault on an intermediate miss. Nil itself is strict: it answers the
/// self-identification query with "Nil" and rejects every other member with a
/// `PropertyLookupError`, so misuse of an absent value is reported where it
/// is used as structured data rather than somewhere downstream.
///

use std::fmt;

use crate::error::PropertyLookupError;
use crate::property::{Capability, PropertyKey};
use crate::value::Value;

/// The process-wide nil value
pub static NIL: Value = Value::Nil;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

impl Nil {
    /// Answer to the self-identification query
    pub const TAG: &'static str = "Nil";

    /// Read a member off nil.
    ///
    /// Nil declares no ordinary members, only the type tag capability.
    pub fn get(&self, member: &PropertyKey) -> Result<Value, PropertyLookupError> {
        match member {
            PropertyKey::Capability(Capability::TypeTag) => Ok(Value::from(Self::TAG)),
            _ => {
                tracing::debug!(%member, "member lookup on nil");
                Err(PropertyLookupError::new(member.clone()))
            }
        }
    }
}

impl fmt::Display for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("nil")
    }
}
