//! Field access for template objects.
//!
//! Context objects expose their fields through the [`Object`] trait instead
//! of runtime reflection: one level of named lookup returning a [`Value`].
//! Map types and `serde_json::Value` implement it out of the box, so any
//! `Serialize` type can act as a template object once serialized to JSON
//! (see [`crate::Context::with_serialized`]).

use std::collections::{BTreeMap, HashMap};

use crate::value::Value;

/// A record that can be referenced as `{{name.field}}` in a template.
pub trait Object: Send + Sync {
    /// Returns the named field, or `None` when the object has no such field.
    fn field(&self, name: &str) -> Option<Value>;
}

impl Object for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Object for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// JSON objects expose their top-level keys; any other JSON shape has no
/// fields.
impl Object for serde_json::Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_object()?.get(name).map(Value::from_json)
    }
}
