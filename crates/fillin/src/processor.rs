//! The template processor: a single-pass `{{...}}` scan and resolve.
//!
//! [`Processor::process`] walks the template left to right, copying plain
//! text verbatim and replacing each placeholder with its resolution. It is a
//! pure function of template, context, and active language, and it never
//! fails: an unknown reference renders a visible `[Not defined: ...]`
//! marker, a missing attribute or formatter renders empty.
//!
//! # Placeholder syntax
//!
//! - `{{object.attribute}}` — field of a record object
//! - `{{object.attribute:formatter:arg1:arg2}}` — field with a formatter
//! - `{{snippetKey}}` / `{{snippetKey:arg1:arg2}}` — snippet, optionally
//!   with positional arguments
//!
//! Delimiters are exactly `{{` and `}}`, matched non-greedily with no
//! nesting. Whitespace inside the braces is significant. An opening `{{`
//! with no later `}}` is literal text.
//!
//! Output is produced in one pass: text substituted for one placeholder is
//! never re-scanned, so snippet output containing literal `{{...}}` stays
//! unexpanded.

use crate::context::{Context, ObjectValue};
use crate::formatter::{DateFormatter, Formatter};
use crate::snippet::SnippetValue;
use crate::value::Value;

use fillin_i18n::Catalog;

/// Resolves `{{...}}` placeholders against a fixed context.
///
/// The context is read-only after construction; the active language is the
/// only mutable state, changed between `process` calls via
/// [`Processor::set_language`]. A `&Processor` is safe to share across
/// threads.
pub struct Processor {
    context: Context,
    language: String,
}

impl Processor {
    /// Creates a processor over the given context and active language.
    pub fn new(context: Context, language: impl Into<String>) -> Self {
        Self {
            context,
            language: language.into(),
        }
    }

    /// Replaces every placeholder in the template, returning the expanded
    /// text. Templates without placeholders come back unchanged.
    pub fn process(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut cursor = 0;
        while let Some(open) = template[cursor..].find("{{").map(|i| cursor + i) {
            let Some(close) = template[open + 2..].find("}}").map(|i| open + 2 + i) else {
                // No closing delimiter: the rest is literal text.
                break;
            };
            out.push_str(&template[cursor..open]);
            out.push_str(&self.resolve(&template[open + 2..close]));
            cursor = close + 2;
        }
        out.push_str(&template[cursor..]);
        out
    }

    /// Sets the language used by subsequent `process` calls.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// The active language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Direct lookup in the object map.
    pub fn object(&self, name: &str) -> Option<&ObjectValue> {
        self.context.objects.get(name)
    }

    /// Direct lookup in the snippet map.
    pub fn snippet(&self, name: &str) -> Option<&SnippetValue> {
        self.context.snippets.get(name)
    }

    /// Direct lookup in the formatter map.
    pub fn formatter(&self, name: &str) -> Option<&dyn Formatter> {
        self.context.formatters.get(name).map(|f| &**f)
    }

    /// The localization catalog behind this processor.
    pub fn catalog(&self) -> &Catalog {
        self.context.catalog()
    }

    /// Looks up a catalog key at the active language.
    pub fn localize(&self, key: &str) -> Option<String> {
        self.catalog().lookup(key, &self.language)
    }

    /// Resolves one placeholder expression.
    ///
    /// A dotted expression is an attribute reference; otherwise the whole
    /// expression may name a plain-text object, and failing that the
    /// colon-split head names a snippet.
    fn resolve(&self, expr: &str) -> String {
        if let Some((object_key, attr_expr)) = expr.split_once('.') {
            return self.attribute(object_key, attr_expr);
        }

        if let Some(ObjectValue::Text(text)) = self.object(expr) {
            return text.clone();
        }

        let mut parts = expr.split(':');
        let key = parts.next().unwrap_or(expr);
        let args: Vec<&str> = parts.collect();
        match self.snippet(key) {
            None => format!("[Not defined: {}]", expr),
            Some(SnippetValue::Text(text)) => text.clone(),
            Some(SnippetValue::Localized(text)) => self
                .catalog()
                .resolve(text, &self.language)
                .unwrap_or_default(),
            Some(SnippetValue::Dynamic(snippet)) => snippet.expand(self, &args),
        }
    }

    /// Resolves `object.attribute[:formatter[:arg...]]`.
    ///
    /// Every miss along the way (unknown object, text object, missing field,
    /// null value, unknown formatter) renders the empty string.
    fn attribute(&self, object_key: &str, attr_expr: &str) -> String {
        let Some(ObjectValue::Record(record)) = self.object(object_key) else {
            return String::new();
        };

        let mut parts = attr_expr.split(':');
        let field = parts.next().unwrap_or(attr_expr);
        let format = parts.next().unwrap_or("plain");
        let args: Vec<&str> = parts.collect();

        let Some(value) = record.field(field) else {
            return String::new();
        };
        if value.is_null() {
            return String::new();
        }

        if format != "plain" {
            return match self.formatter(format) {
                Some(formatter) => formatter.format(&value, &args, self),
                None => String::new(),
            };
        }
        if let Value::Date(_) = value {
            // Dates take the registered `date` formatter, or the built-in
            // default when none is registered.
            return match self.formatter("date") {
                Some(formatter) => formatter.format(&value, &args, self),
                None => DateFormatter.format(&value, &args, self),
            };
        }
        value.to_string()
    }
}
