//!
//! Callable Values
//!
//! A `Function` pairs a native body with an optional bound receiver. Bodies
//! receive the receiver as `this` explicitly; there is no ambient context.
//! Member access binds a looked-up function to the object it was read from,
//! producing a new callable value that carries that receiver. Binding is
//! sticky: a function that already has a receiver keeps it.
//!

use std::fmt;
use std::sync::Arc;

use crate::error::PropertyLookupError;
use crate::nil::NIL;
use crate::value::Value;

/// Native function body: `(this, args) -> result`
pub type NativeFn = dyn Fn(&Value, &[Value]) -> Result<Value, PropertyLookupError> + Send + Sync;

#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    body: Arc<NativeFn>,
    receiver: Option<Arc<Value>>,
}

impl Function {
    pub fn new<F>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, PropertyLookupError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            body: Arc::new(body),
            receiver: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_bound(&self) -> bool {
        self.receiver.is_some()
    }

    pub fn receiver(&self) -> Option<&Value> {
        self.receiver.as_deref()
    }

    /// Produce a callable that uses `receiver` as `this`
    pub fn bind(&self, receiver: &Value) -> Function {
        if self.is_bound() {
            return self.clone();
        }
        Function {
            name: self.name.clone(),
            body: self.body.clone(),
            receiver: Some(Arc::new(receiver.clone())),
        }
    }

    /// Invoke with the bound receiver, or nil when unbound
    pub fn call(&self, args: &[Value]) -> Result<Value, PropertyLookupError> {
        let this = self.receiver.as_deref().unwrap_or(&NIL);
        (self.body)(this, args)
    }

    /// Identity comparison: same body and same receiver allocation
    pub fn ptr_eq(&self, other: &Function) -> bool {
        let same_receiver = match (&self.receiver, &other.receiver) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        Arc::ptr_eq(&self.body, &other.body) && same_receiver
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("bound", &self.is_bound())
            .finish()
    }
}
