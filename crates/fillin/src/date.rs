//! UTC date value with localized pattern formatting.
//!
//! [`Date`] wraps a UTC timestamp and offers the textual forms the template
//! processor needs: epoch seconds, ISO 8601, RFC 822, a plain default form,
//! and a `date()`-style pattern expander whose weekday and month names are
//! resolved through an i18n [`Catalog`].

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use fillin_i18n::{dates, Catalog};

use crate::error::DateError;

/// An opaque UTC timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    inner: DateTime<Utc>,
}

impl Date {
    /// Builds a date from epoch seconds (UTC).
    pub fn from_unix(secs: i64) -> Result<Date, DateError> {
        DateTime::from_timestamp(secs, 0)
            .map(|inner| Date { inner })
            .ok_or(DateError::InvalidTimestamp(secs))
    }

    /// Builds a date from text.
    ///
    /// Accepted forms, tried in order: bare epoch seconds, RFC 3339
    /// (`2021-01-01T00:00:00+00:00`), and `2021-01-01 00:00:00` (taken as
    /// UTC).
    pub fn parse(text: &str) -> Result<Date, DateError> {
        let text = text.trim();
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || c == '-') {
            if let Ok(secs) = text.parse::<i64>() {
                return Date::from_unix(secs);
            }
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Ok(Date {
                inner: parsed.with_timezone(&Utc),
            });
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
            return Ok(Date {
                inner: naive.and_utc(),
            });
        }
        Err(DateError::Unparseable(text.to_string()))
    }

    /// Epoch seconds.
    pub fn to_unix(&self) -> i64 {
        self.inner.timestamp()
    }

    /// ISO 8601 form with offset, e.g. `2021-01-01T00:00:00+00:00`.
    pub fn to_iso8601(&self) -> String {
        self.inner.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    }

    /// RFC 822 form, e.g. `Fri, 01 Jan 2021 00:00:00 +0000`.
    pub fn to_rfc822(&self) -> String {
        self.inner.format("%a, %d %b %Y %H:%M:%S %z").to_string()
    }

    /// Expands a `date()`-style pattern with names localized through the
    /// catalog.
    ///
    /// Supported tokens: `d j m n Y y H G i s U` (numeric), `D l` (weekday
    /// name, short/long), `M F` (month name, short/long), `N` (ISO weekday
    /// 1–7), `w` (weekday 0–6, Sunday first). A backslash escapes the next
    /// character; everything else is copied through.
    pub fn format_pattern(&self, pattern: &str, catalog: &Catalog, lang: &str) -> String {
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                'd' => out.push_str(&format!("{:02}", self.inner.day())),
                'j' => out.push_str(&self.inner.day().to_string()),
                'm' => out.push_str(&format!("{:02}", self.inner.month())),
                'n' => out.push_str(&self.inner.month().to_string()),
                'Y' => out.push_str(&self.inner.year().to_string()),
                'y' => out.push_str(&format!("{:02}", self.inner.year().rem_euclid(100))),
                'H' => out.push_str(&format!("{:02}", self.inner.hour())),
                'G' => out.push_str(&self.inner.hour().to_string()),
                'i' => out.push_str(&format!("{:02}", self.inner.minute())),
                's' => out.push_str(&format!("{:02}", self.inner.second())),
                'D' => out.push_str(&self.weekday_name(catalog, lang, true)),
                'l' => out.push_str(&self.weekday_name(catalog, lang, false)),
                'M' => out.push_str(&self.month_name(catalog, lang, true)),
                'F' => out.push_str(&self.month_name(catalog, lang, false)),
                'N' => out.push_str(&self.inner.weekday().number_from_monday().to_string()),
                'w' => out.push_str(&self.inner.weekday().num_days_from_sunday().to_string()),
                'U' => out.push_str(&self.to_unix().to_string()),
                other => out.push(other),
            }
        }
        out
    }

    fn weekday_name(&self, catalog: &Catalog, lang: &str, short: bool) -> String {
        let index = self.inner.weekday().num_days_from_monday() as usize;
        catalog
            .lookup(dates::weekday_key(index, short), lang)
            .unwrap_or_else(|| {
                // English names from chrono when the catalog has no entry.
                let spec = if short { "%a" } else { "%A" };
                self.inner.format(spec).to_string()
            })
    }

    fn month_name(&self, catalog: &Catalog, lang: &str, short: bool) -> String {
        let index = self.inner.month() as usize;
        catalog
            .lookup(dates::month_key(index, short), lang)
            .unwrap_or_else(|| {
                let spec = if short { "%b" } else { "%B" };
                self.inner.format(spec).to_string()
            })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%d %H:%M:%S"))
    }
}
