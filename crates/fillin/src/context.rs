//! The context supplied to a processor: named objects, snippets, and
//! formatters, plus the localization catalog.
//!
//! Contexts are assembled with a chained builder and are read-only once the
//! processor is constructed:
//!
//! ```rust
//! use fillin::{Context, Processor, Value};
//! use std::collections::HashMap;
//!
//! let mut user = HashMap::new();
//! user.insert("name".to_string(), Value::from("Alice"));
//!
//! let context = Context::new()
//!     .with_object("user", user)
//!     .with_snippet("footer", "Sent by fillin");
//!
//! let processor = Processor::new(context, "en");
//! assert_eq!(processor.process("Hi {{user.name}}! {{footer}}"), "Hi Alice! Sent by fillin");
//! ```

use std::collections::HashMap;

use fillin_i18n::Catalog;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::formatter::Formatter;
use crate::object::Object;
use crate::snippet::{Snippet, SnippetValue};

static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new("en"));

/// An object registered in the context: plain text or a record with fields.
pub enum ObjectValue {
    /// Inserted verbatim for `{{name}}`; renders empty for `{{name.field}}`.
    Text(String),
    /// Supports `{{name.field}}` lookups; a bare `{{name}}` falls through to
    /// the snippet table.
    Record(Box<dyn Object>),
}

/// The named objects, snippets, and formatters available to one processor,
/// plus its localization catalog.
///
/// Keys are unique, case-sensitive strings; registering a key twice replaces
/// the earlier entry.
#[derive(Default)]
pub struct Context {
    pub(crate) objects: HashMap<String, ObjectValue>,
    pub(crate) snippets: HashMap<String, SnippetValue>,
    pub(crate) formatters: HashMap<String, Box<dyn Formatter>>,
    pub(crate) catalog: Option<Catalog>,
}

impl Context {
    /// Creates an empty context backed by the default catalog
    /// (built-in date names, default language `en`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the localization catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Registers a plain-text object.
    pub fn with_text_object(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.objects
            .insert(name.into(), ObjectValue::Text(text.into()));
        self
    }

    /// Registers a record object for `{{name.field}}` lookups.
    pub fn with_object(mut self, name: impl Into<String>, object: impl Object + 'static) -> Self {
        self.objects
            .insert(name.into(), ObjectValue::Record(Box::new(object)));
        self
    }

    /// Registers any `Serialize` type as a record object by serializing it
    /// to JSON. Fails only when serialization does.
    pub fn with_serialized(
        self,
        name: impl Into<String>,
        data: &impl Serialize,
    ) -> Result<Self, serde_json::Error> {
        let value = serde_json::to_value(data)?;
        Ok(self.with_object(name, value))
    }

    /// Registers a snippet: plain text, a [`fillin_i18n::LocalizedText`], or
    /// anything already converted to a [`SnippetValue`].
    pub fn with_snippet(mut self, name: impl Into<String>, snippet: impl Into<SnippetValue>) -> Self {
        self.snippets.insert(name.into(), snippet.into());
        self
    }

    /// Registers a computed snippet.
    pub fn with_dynamic_snippet(
        mut self,
        name: impl Into<String>,
        snippet: impl Snippet + 'static,
    ) -> Self {
        self.snippets
            .insert(name.into(), SnippetValue::Dynamic(Box::new(snippet)));
        self
    }

    /// Registers a formatter.
    pub fn with_formatter(
        mut self,
        name: impl Into<String>,
        formatter: impl Formatter + 'static,
    ) -> Self {
        self.formatters.insert(name.into(), Box::new(formatter));
        self
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        self.catalog.as_ref().unwrap_or(&DEFAULT_CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn later_registration_wins() {
        let context = Context::new()
            .with_text_object("x", "first")
            .with_text_object("x", "second");
        match context.objects.get("x") {
            Some(ObjectValue::Text(text)) => assert_eq!(text, "second"),
            _ => panic!("expected text object"),
        }
    }

    #[test]
    fn with_serialized_exposes_fields() {
        #[derive(serde::Serialize)]
        struct User {
            name: &'static str,
            age: u32,
        }

        let context = Context::new()
            .with_serialized("user", &User { name: "Bob", age: 7 })
            .unwrap();
        match context.objects.get("user") {
            Some(ObjectValue::Record(record)) => {
                assert_eq!(record.field("name"), Some(Value::Text("Bob".into())));
                assert_eq!(record.field("age"), Some(Value::Int(7)));
            }
            _ => panic!("expected record object"),
        }
    }

    #[test]
    fn default_catalog_is_seeded() {
        let context = Context::new();
        assert_eq!(
            context.catalog().lookup("date_friday_short", "en").as_deref(),
            Some("Fri")
        );
    }
}
