///
/// Member names.
///
/// A member is addressed either by an ordinary name (record fields, builtin
/// members like `length`) or by a capability identifier. Capability identifiers
/// live in their own namespace so a record field can never shadow a protocol
/// slot, and their textual ids are part of the contract with the code
/// generator: they must not change between releases.
///

use std::fmt;
use std::sync::Arc;

use crate::keyword::Keyword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `keys()` slot of the record protocol
    RecordKeys,
    /// `values()` slot of the record protocol
    RecordValues,
    /// Entry enumeration as `[key, value]` pairs
    Iterator,
    /// Self-identification query; answered by `nil` with "Nil"
    TypeTag,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::RecordKeys,
        Capability::RecordValues,
        Capability::Iterator,
        Capability::TypeTag,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Capability::RecordKeys => "std/record/Record:keys",
            Capability::RecordValues => "std/record/Record:values",
            Capability::Iterator => "std/core:iterator",
            Capability::TypeTag => "std/core:type-tag",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|capability| capability.id() == id)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Name(Arc<str>),
    Capability(Capability),
}

impl PropertyKey {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            PropertyKey::Name(name) => Some(name.as_ref()),
            PropertyKey::Capability(_) => None,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Name(name) => f.write_str(name),
            PropertyKey::Capability(capability) => fmt::Display::fmt(capability, f),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Name(Arc::from(name))
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Name(Arc::from(name))
    }
}

impl From<Arc<str>> for PropertyKey {
    fn from(name: Arc<str>) -> Self {
        PropertyKey::Name(name)
    }
}

impl From<Keyword> for PropertyKey {
    fn from(keyword: Keyword) -> Self {
        PropertyKey::Name(Arc::from(keyword.as_str()))
    }
}

impl From<Capability> for PropertyKey {
    fn from(capability: Capability) -> Self {
        PropertyKey::Capability(capability)
    }
}
