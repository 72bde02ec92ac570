///
/// Runtime value errors.
///
/// The value layer has exactly one failure: reading a member off `nil` that
/// nil does not declare. It marks a defect in generated code (absence used as
/// if it carried structure) and is propagated to the caller untouched.
///

use thiserror::Error;

use crate::property::PropertyKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Nil does not have property: {member}")]
pub struct PropertyLookupError {
    pub member: PropertyKey,
}

impl PropertyLookupError {
    pub fn new(member: impl Into<PropertyKey>) -> Self {
        Self {
            member: member.into(),
        }
    }
}
