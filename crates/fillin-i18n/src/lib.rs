//! Language-keyed text catalogs for template processing.
//!
//! This crate provides the localization collaborator used by the `fillin`
//! template processor:
//!
//! - [`LocalizedText`]: a single piece of text in one or more languages,
//!   resolved with a fallback chain (requested language → default language →
//!   any entry).
//! - [`Catalog`]: a keyed table of localized texts with a default language.
//!
//! A new catalog is pre-seeded with the built-in date-name tables (weekday
//! and month names, long and short, English and German) and the per-language
//! number separators (`decimal_point`, `thousand_sep`) that the date and
//! currency formatters rely on. Use [`Catalog::empty`] to start from nothing.
//!
//! # Example
//!
//! ```rust
//! use fillin_i18n::{Catalog, LocalizedText};
//!
//! let catalog = Catalog::new("en").with_entry(
//!     "greeting",
//!     LocalizedText::new().with("en", "Hello").with("de", "Hallo"),
//! );
//!
//! assert_eq!(catalog.lookup("greeting", "de").as_deref(), Some("Hallo"));
//! // Unknown language falls back to the default language.
//! assert_eq!(catalog.lookup("greeting", "fr").as_deref(), Some("Hello"));
//! ```

use std::collections::{BTreeMap, HashMap};

pub mod dates;

/// A piece of text available in one or more languages.
///
/// Entries are keyed by language tag (exact, case-sensitive match). The
/// backing map is ordered so that the "any entry" fallback is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    entries: BTreeMap<String, String>,
}

impl LocalizedText {
    /// Creates an empty localized text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation for the given language (chained builder).
    pub fn with(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(lang.into(), text.into());
        self
    }

    /// Returns the text for exactly this language, if present.
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.entries.get(lang).map(String::as_str)
    }

    /// Resolves the text for a language with fallback.
    ///
    /// Order: the requested language, then `fallback_lang`, then the first
    /// entry in language-tag order. Returns `None` only when no translation
    /// exists at all.
    pub fn resolve(&self, lang: &str, fallback_lang: &str) -> Option<&str> {
        self.get(lang)
            .or_else(|| self.get(fallback_lang))
            .or_else(|| self.entries.values().next().map(String::as_str))
    }

    /// True when no translation is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A keyed table of localized texts with a default language.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_lang: String,
    entries: HashMap<String, LocalizedText>,
}

impl Catalog {
    /// Creates a catalog with the given default language, pre-seeded with
    /// the built-in date-name and number-separator tables (see [`dates`]).
    pub fn new(default_lang: impl Into<String>) -> Self {
        let mut catalog = Self::empty(default_lang);
        for (key, text) in dates::builtin_entries() {
            catalog.entries.insert(key.to_string(), text.clone());
        }
        catalog
    }

    /// Creates a catalog with no entries at all.
    pub fn empty(default_lang: impl Into<String>) -> Self {
        Self {
            default_lang: default_lang.into(),
            entries: HashMap::new(),
        }
    }

    /// Registers a localized text under a key (chained builder).
    ///
    /// Re-registering a key replaces the previous entry.
    pub fn with_entry(mut self, key: impl Into<String>, text: LocalizedText) -> Self {
        self.entries.insert(key.into(), text);
        self
    }

    /// Registers a single-language text under a key (chained builder).
    pub fn with_text(
        self,
        key: impl Into<String>,
        lang: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let merged = match self.entries.get(&key) {
            Some(existing) => existing.clone(),
            None => LocalizedText::new(),
        };
        self.with_entry(key, merged.with(lang, text))
    }

    /// The catalog's default language tag.
    pub fn default_language(&self) -> &str {
        &self.default_lang
    }

    /// Looks up a key and resolves it for the given language.
    pub fn lookup(&self, key: &str, lang: &str) -> Option<String> {
        self.entries
            .get(key)
            .and_then(|text| text.resolve(lang, &self.default_lang))
            .map(str::to_string)
    }

    /// Resolves a free-standing localized text against this catalog's
    /// default language.
    pub fn resolve(&self, text: &LocalizedText, lang: &str) -> Option<String> {
        text.resolve(lang, &self.default_lang).map(str::to_string)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new("en")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_requested_language() {
        let text = LocalizedText::new().with("en", "Hello").with("de", "Hallo");
        assert_eq!(text.resolve("de", "en"), Some("Hallo"));
    }

    #[test]
    fn resolve_falls_back_to_default_then_any() {
        let text = LocalizedText::new().with("de", "Hallo");
        assert_eq!(text.resolve("fr", "de"), Some("Hallo"));

        let text = LocalizedText::new().with("it", "Ciao");
        assert_eq!(text.resolve("fr", "en"), Some("Ciao"));

        assert_eq!(LocalizedText::new().resolve("fr", "en"), None);
    }

    #[test]
    fn catalog_lookup_uses_default_language() {
        let catalog = Catalog::empty("en")
            .with_text("greeting", "en", "Hello")
            .with_text("greeting", "de", "Hallo");
        assert_eq!(catalog.lookup("greeting", "de").as_deref(), Some("Hallo"));
        assert_eq!(catalog.lookup("greeting", "fr").as_deref(), Some("Hello"));
        assert_eq!(catalog.lookup("missing", "en"), None);
    }

    #[test]
    fn new_catalog_carries_date_names() {
        let catalog = Catalog::new("en");
        assert_eq!(catalog.lookup("date_monday", "en").as_deref(), Some("Monday"));
        assert_eq!(catalog.lookup("date_monday", "de").as_deref(), Some("Montag"));
        assert_eq!(catalog.lookup("date_january_short", "en").as_deref(), Some("Jan"));
        assert_eq!(catalog.lookup("decimal_point", "de").as_deref(), Some(","));
        assert_eq!(catalog.lookup("thousand_sep", "en").as_deref(), Some(","));
    }

    #[test]
    fn empty_catalog_has_no_builtins() {
        let catalog = Catalog::empty("en");
        assert_eq!(catalog.lookup("date_monday", "en"), None);
    }
}
