//! Error types for date construction.
//!
//! Template processing itself never fails; unresolved references degrade to
//! fallback text. The only fallible surface is building a [`crate::Date`]
//! from external input.

/// Error building a date value from external input.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    /// Epoch seconds outside the representable range.
    #[error("timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    /// Text that matches none of the accepted date forms.
    #[error("unparseable date: {0:?}")]
    Unparseable(String),
}
