//! Built-in date-name and number-separator tables.
//!
//! Weekday and month names (long and short forms) in English and German,
//! plus the per-language `decimal_point` and `thousand_sep` entries used for
//! currency formatting. Key helpers map calendar indices to catalog keys so
//! date formatters can resolve localized names without string assembly.

use once_cell::sync::Lazy;

use crate::LocalizedText;

/// Catalog keys for long weekday names, Monday first.
pub const WEEKDAY_KEYS: [&str; 7] = [
    "date_monday",
    "date_tuesday",
    "date_wednesday",
    "date_thursday",
    "date_friday",
    "date_saturday",
    "date_sunday",
];

/// Catalog keys for short weekday names, Monday first.
pub const WEEKDAY_SHORT_KEYS: [&str; 7] = [
    "date_monday_short",
    "date_tuesday_short",
    "date_wednesday_short",
    "date_thursday_short",
    "date_friday_short",
    "date_saturday_short",
    "date_sunday_short",
];

/// Catalog keys for long month names, January first.
pub const MONTH_KEYS: [&str; 12] = [
    "date_january",
    "date_february",
    "date_march",
    "date_april",
    "date_may",
    "date_june",
    "date_july",
    "date_august",
    "date_september",
    "date_october",
    "date_november",
    "date_december",
];

/// Catalog keys for short month names, January first.
pub const MONTH_SHORT_KEYS: [&str; 12] = [
    "date_january_short",
    "date_february_short",
    "date_march_short",
    "date_april_short",
    "date_may_short",
    "date_june_short",
    "date_july_short",
    "date_august_short",
    "date_september_short",
    "date_october_short",
    "date_november_short",
    "date_december_short",
];

/// Catalog key for a weekday, counted in days from Monday (0–6).
pub fn weekday_key(days_from_monday: usize, short: bool) -> &'static str {
    let keys = if short { &WEEKDAY_SHORT_KEYS } else { &WEEKDAY_KEYS };
    keys[days_from_monday % 7]
}

/// Catalog key for a month, 1-based (1 = January).
pub fn month_key(month: usize, short: bool) -> &'static str {
    let keys = if short { &MONTH_SHORT_KEYS } else { &MONTH_KEYS };
    keys[(month.max(1) - 1) % 12]
}

/// (key, english, german) rows for every built-in entry.
const BUILTIN_ROWS: &[(&str, &str, &str)] = &[
    ("date_monday", "Monday", "Montag"),
    ("date_monday_short", "Mon", "Mo"),
    ("date_tuesday", "Tuesday", "Dienstag"),
    ("date_tuesday_short", "Tue", "Di"),
    ("date_wednesday", "Wednesday", "Mittwoch"),
    ("date_wednesday_short", "Wed", "Mi"),
    ("date_thursday", "Thursday", "Donnerstag"),
    ("date_thursday_short", "Thu", "Do"),
    ("date_friday", "Friday", "Freitag"),
    ("date_friday_short", "Fri", "Fr"),
    ("date_saturday", "Saturday", "Samstag"),
    ("date_saturday_short", "Sat", "Sa"),
    ("date_sunday", "Sunday", "Sonntag"),
    ("date_sunday_short", "Sun", "So"),
    ("date_january", "January", "Januar"),
    ("date_january_short", "Jan", "Jan"),
    ("date_february", "February", "Februar"),
    ("date_february_short", "Feb", "Feb"),
    ("date_march", "March", "März"),
    ("date_march_short", "Mar", "Mär"),
    ("date_april", "April", "April"),
    ("date_april_short", "Apr", "Apr"),
    ("date_may", "May", "Mai"),
    ("date_may_short", "May", "Mai"),
    ("date_june", "June", "Juni"),
    ("date_june_short", "Jun", "Jun"),
    ("date_july", "July", "Juli"),
    ("date_july_short", "Jul", "Jul"),
    ("date_august", "August", "August"),
    ("date_august_short", "Aug", "Aug"),
    ("date_september", "September", "September"),
    ("date_september_short", "Sep", "Sep"),
    ("date_october", "October", "Oktober"),
    ("date_october_short", "Oct", "Okt"),
    ("date_november", "November", "November"),
    ("date_november_short", "Nov", "Nov"),
    ("date_december", "December", "Dezember"),
    ("date_december_short", "Dec", "Dez"),
    ("decimal_point", ".", ","),
    ("thousand_sep", ",", "."),
];

static BUILTIN: Lazy<Vec<(&'static str, LocalizedText)>> = Lazy::new(|| {
    BUILTIN_ROWS
        .iter()
        .map(|&(key, en, de)| (key, LocalizedText::new().with("en", en).with("de", de)))
        .collect()
});

/// Iterates over every built-in (key, text) pair.
pub fn builtin_entries() -> impl Iterator<Item = &'static (&'static str, LocalizedText)> {
    BUILTIN.iter()
}
