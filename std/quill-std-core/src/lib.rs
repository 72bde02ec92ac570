//!
//! quill-std-core - Core Runtime Value Model
//!
//! This crate provides the value substrate shared by every compiled quill program:
//!
//! - `Value` for the dynamic values passed between generated functions
//! - `Nil` for the absence sentinel (strict member access, self-identifies as "Nil")
//! - `Keyword` for process-wide interned atoms compared by identity
//! - `ObjectLiteral` for insertion-ordered records built from key/value pairs
//! - `Record` for uniform keys/values enumeration over records and maps
//! - `dot` for generic member access that binds methods to their receiver
//!
//! Everything here is synchronous and allocation-light. The only shared mutable
//! state is the keyword registry, which is a concurrent interner.
//!

pub mod error;
pub mod function;
pub mod keyword;
pub mod member;
pub mod nil;
pub mod object;
pub mod property;
pub mod record;
pub mod value;

pub use error::*;
pub use function::*;
pub use keyword::*;
pub use member::*;
pub use nil::*;
pub use object::*;
pub use property::*;
pub use record::*;
pub use value::*;
