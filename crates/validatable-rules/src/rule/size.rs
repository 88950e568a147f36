use rust_decimal::Decimal;

use crate::value::Value;

/// How size rules (`min`, `max`, `between`, `size`) measure a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    /// Compared by magnitude.
    Numeric,
    /// Compared by number of characters.
    String,
    /// Compared by number of items.
    Array,
}

impl SizeKind {
    /// The kind used to pick a size message for `value`.
    pub fn of(value: Option<&Value>, numeric_field: bool) -> Self {
        match value {
            _ if numeric_field => Self::Numeric,
            Some(Value::Integer(_) | Value::Decimal(_)) => Self::Numeric,
            Some(Value::List(_) | Value::Map(_)) => Self::Array,
            _ => Self::String,
        }
    }
}

/// Measures `value` for size rules.
///
/// Text is measured in characters, unless the field carries a numeric rule and the text
/// parses as a number. Values with no size (null, booleans) yield `None`.
pub fn measure(value: &Value, numeric_field: bool) -> Option<Decimal> {
    match value {
        Value::Integer(_) | Value::Decimal(_) => value.as_number(),
        Value::Text(text) => {
            if numeric_field && let Some(number) = value.to_number() {
                return Some(number);
            }
            Some(Decimal::from(text.chars().count()))
        }
        Value::List(items) => Some(Decimal::from(items.len())),
        Value::Map(map) => Some(Decimal::from(map.len())),
        Value::Null | Value::Boolean(_) => None,
    }
}
