//! Formatters: named strategies that turn a field value into display text.
//!
//! A formatter is selected in a placeholder as
//! `{{object.field:formatterName:arg1:arg2}}`. The built-ins cover the
//! common cases: [`DateFormatter`] for timestamps, [`CurrencyFormatter`] for
//! money amounts with per-language separators, and [`I18nFormatter`] for
//! values that are themselves localization lookups.

use fillin_i18n::LocalizedText;

use crate::date::Date;
use crate::processor::Processor;
use crate::value::Value;

/// Converts a field value plus positional arguments into display text.
///
/// Contract: return the empty string for a null value, and tolerate any
/// argument count — a missing optional argument falls back to a
/// formatter-specific default. Formatters may call back into the processor
/// (for the active language or nested formatting); cyclic self-reference is
/// not guarded against.
pub trait Formatter: Send + Sync {
    /// Formats the value using the positional arguments.
    fn format(&self, value: &Value, args: &[&str], processor: &Processor) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&Value, &[&str], &Processor) -> String + Send + Sync,
{
    fn format(&self, value: &Value, args: &[&str], processor: &Processor) -> String {
        self(value, args, processor)
    }
}

/// Formats date values (and parseable text/epoch values).
///
/// The first argument selects the output form: `unix`, `iso8601`, `rfc822`,
/// or anything else as a pattern — looked up in the catalog first, so the
/// argument may be an i18n key naming a per-language pattern. With no
/// arguments the date's default `Y-m-d H:M:S` form is used. Values that
/// cannot be read as a date format to the empty string.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateFormatter;

impl Formatter for DateFormatter {
    fn format(&self, value: &Value, args: &[&str], processor: &Processor) -> String {
        let date = match value {
            Value::Date(date) => *date,
            Value::Int(secs) => match Date::from_unix(*secs) {
                Ok(date) => date,
                Err(_) => return String::new(),
            },
            Value::Text(text) => match Date::parse(text) {
                Ok(date) => date,
                Err(_) => return String::new(),
            },
            _ => return String::new(),
        };
        match args.first().copied() {
            Some("unix") => date.to_unix().to_string(),
            Some("iso8601") => date.to_iso8601(),
            Some("rfc822") => date.to_rfc822(),
            Some(key) => {
                let pattern = processor.localize(key).unwrap_or_else(|| key.to_string());
                date.format_pattern(&pattern, processor.catalog(), processor.language())
            }
            None => date.to_string(),
        }
    }
}

/// Formats a numeric value as a money amount.
///
/// Two decimals, thousands grouping, with the decimal point and thousands
/// separator taken from the catalog's `decimal_point` / `thousand_sep`
/// entries for the active language. The first argument is the currency
/// symbol, appended after a space; without one the bare amount is returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrencyFormatter;

impl Formatter for CurrencyFormatter {
    fn format(&self, value: &Value, args: &[&str], processor: &Processor) -> String {
        if value.is_null() {
            return String::new();
        }
        let amount = match value.as_f64() {
            Some(amount) => amount,
            None => return String::new(),
        };
        let currency = args.first().copied().unwrap_or("");
        let decimal_point = processor
            .localize("decimal_point")
            .unwrap_or_else(|| ".".to_string());
        let thousand_sep = processor
            .localize("thousand_sep")
            .unwrap_or_else(|| ",".to_string());

        let cents = (amount.abs() * 100.0).round() as u64;
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        let grouped = group_digits(cents / 100, &thousand_sep);
        format!(
            "{}{}{}{:02} {}",
            sign,
            grouped,
            decimal_point,
            cents % 100,
            currency
        )
        .trim()
        .to_string()
    }
}

fn group_digits(n: u64, sep: &str) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + (digits.len() / 3) * sep.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(c);
    }
    out
}

/// Treats the value as a localization lookup at the active language.
///
/// Text values are catalog keys (an unknown key falls back to the key text
/// itself); JSON maps are read as language → text sets. Other values format
/// to their plain text form.
#[derive(Debug, Default, Clone, Copy)]
pub struct I18nFormatter;

impl Formatter for I18nFormatter {
    fn format(&self, value: &Value, _args: &[&str], processor: &Processor) -> String {
        match value {
            Value::Null => String::new(),
            Value::Text(key) => processor.localize(key).unwrap_or_else(|| key.clone()),
            Value::Json(serde_json::Value::Object(map)) => {
                let text: LocalizedText = map
                    .iter()
                    .filter_map(|(lang, v)| v.as_str().map(|s| (lang.as_str(), s)))
                    .collect();
                processor
                    .catalog()
                    .resolve(&text, processor.language())
                    .unwrap_or_default()
            }
            other => other.to_string(),
        }
    }
}
