//! The field-value model for template objects.
//!
//! [`Value`] covers everything an object field can hold: the primitive
//! scalar types, a [`Date`], and [`Value::Json`] for structured values
//! (arrays and maps), which render as their JSON text form.

use std::fmt;

use crate::date::Date;

/// A single field value exposed by a template object.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent/null. Renders as the empty string.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A date value, rendered through the date formatter by default.
    Date(Date),
    /// A structured (array or map) value. Renders as compact JSON.
    Json(serde_json::Value),
}

impl Value {
    /// Converts a JSON value into a field value.
    ///
    /// Scalars map to their scalar variants; arrays and objects stay
    /// structured and stringify as JSON.
    pub fn from_json(value: &serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                Value::Json(value.clone())
            }
        }
    }

    /// True for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The numeric magnitude of the value, if it has one.
    ///
    /// Text values are parsed; anything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Value::Date(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_display_plainly() {
        assert_eq!(Value::Text("abc".into()).to_string(), "abc");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(19.99).to_string(), "19.99");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn structured_values_display_as_json() {
        let value = Value::from_json(&json!({"a": 1}));
        assert_eq!(value.to_string(), r#"{"a":1}"#);
        let value = Value::from_json(&json!([1, 2, 3]));
        assert_eq!(value.to_string(), "[1,2,3]");
    }

    #[test]
    fn from_json_maps_scalars() {
        assert_eq!(Value::from_json(&json!(null)), Value::Null);
        assert_eq!(Value::from_json(&json!(7)), Value::Int(7));
        assert_eq!(Value::from_json(&json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from_json(&json!("x")), Value::Text("x".into()));
    }

    #[test]
    fn as_f64_parses_text() {
        assert_eq!(Value::Text(" 12.5 ".into()).as_f64(), Some(12.5));
        assert_eq!(Value::Text("nope".into()).as_f64(), None);
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    }
}
