//! # fillin — placeholder-substitution template processing
//!
//! `fillin` resolves `{{...}}` placeholders in a text body against a
//! [`Context`] of named objects, named snippets, and named formatters,
//! producing expanded text. It is deliberately small: no control flow, no
//! template compilation or caching, no sandboxing — just a single-pass
//! scan-and-replace with pluggable formatting.
//!
//! ## Core concepts
//!
//! - [`Processor`]: resolves templates; pure function of template + context
//!   + active language
//! - [`Context`]: the named objects, snippets, and formatters for one
//!   processor, plus its i18n catalog
//! - [`Object`]: field access for record objects (`{{name.field}}`)
//! - [`Snippet`] / [`Formatter`]: the two capability traits behind
//!   `{{key:args}}` and `{{name.field:formatter:args}}`
//! - [`Date`]: UTC date value with localized pattern formatting
//!
//! ## Quick start
//!
//! ```rust
//! use fillin::{Context, Date, DateFormatter, Processor, Value};
//! use std::collections::HashMap;
//!
//! let mut order = HashMap::new();
//! order.insert("id".to_string(), Value::from(4812_i64));
//! order.insert(
//!     "placed".to_string(),
//!     Value::from(Date::from_unix(1609459200).unwrap()),
//! );
//!
//! let context = Context::new()
//!     .with_object("order", order)
//!     .with_snippet("thanks", "Thank you for your order!")
//!     .with_formatter("date", DateFormatter);
//!
//! let processor = Processor::new(context, "en");
//! let output = processor.process(
//!     "Order #{{order.id}}, placed {{order.placed:date:rfc822}}. {{thanks}}",
//! );
//! assert_eq!(
//!     output,
//!     "Order #4812, placed Fri, 01 Jan 2021 00:00:00 +0000. Thank you for your order!",
//! );
//! ```
//!
//! ## Failure semantics
//!
//! [`Processor::process`] never fails. A whole-placeholder miss renders a
//! visible `[Not defined: <expr>]` marker; a missing attribute, field, or
//! formatter renders the empty string. Rendering of the surrounding document
//! always completes.

pub mod context;
pub mod date;
pub mod error;
pub mod formatter;
pub mod object;
pub mod processor;
pub mod snippet;
pub mod value;

pub use context::{Context, ObjectValue};
pub use date::Date;
pub use error::DateError;
pub use formatter::{CurrencyFormatter, DateFormatter, Formatter, I18nFormatter};
pub use object::Object;
pub use processor::Processor;
pub use snippet::{Snippet, SnippetValue};
pub use value::Value;

pub use fillin_i18n::{Catalog, LocalizedText};
