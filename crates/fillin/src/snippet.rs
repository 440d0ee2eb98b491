//! Snippets: named, reusable pieces of output content.
//!
//! A snippet is referenced as `{{key}}` or `{{key:arg1:arg2}}`. Its value is
//! plain text, a localized text set, or a [`Snippet`] implementation that
//! computes output from the processor and its positional arguments.

use fillin_i18n::LocalizedText;

use crate::processor::Processor;

/// A parameterizable piece of template output.
///
/// Implementations must be pure functions of the processor state and the
/// positional arguments; they may read the active language or call back into
/// the processor. Cyclic self-reference (a snippet expanding a placeholder
/// that names itself) is not detected and will recurse without bound.
pub trait Snippet: Send + Sync {
    /// Produces the snippet's output for the given positional arguments.
    fn expand(&self, processor: &Processor, args: &[&str]) -> String;
}

impl<F> Snippet for F
where
    F: Fn(&Processor, &[&str]) -> String + Send + Sync,
{
    fn expand(&self, processor: &Processor, args: &[&str]) -> String {
        self(processor, args)
    }
}

/// A snippet registered in the context.
pub enum SnippetValue {
    /// Fixed text, inserted verbatim (arguments are ignored).
    Text(String),
    /// Language-keyed text, resolved at the active language.
    Localized(LocalizedText),
    /// Computed output.
    Dynamic(Box<dyn Snippet>),
}

impl From<&str> for SnippetValue {
    fn from(text: &str) -> Self {
        SnippetValue::Text(text.to_string())
    }
}

impl From<String> for SnippetValue {
    fn from(text: String) -> Self {
        SnippetValue::Text(text)
    }
}

impl From<LocalizedText> for SnippetValue {
    fn from(text: LocalizedText) -> Self {
        SnippetValue::Localized(text)
    }
}

impl<S: Snippet + 'static> From<Box<S>> for SnippetValue {
    fn from(snippet: Box<S>) -> Self {
        SnippetValue::Dynamic(snippet)
    }
}
