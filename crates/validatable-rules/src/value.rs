use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

/// A generic wrapper enum to hold any field value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Decimal(Decimal),
    Text(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::Text(s.to_string()))
    }
}

// macro rules for implementing From trait for Value enum variants
macro_rules! impl_conv_for_value {
    ($variant:ident, $ty:ty, $name:ident, $test_name:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }

        impl Value {
            /// Attempts to extract a reference to the inner value if it matches the variant.
            pub fn $name(&self) -> Option<&$ty> {
                if let Value::$variant(v) = self {
                    Some(v)
                } else {
                    None
                }
            }
        }

        #[cfg(test)]
        mod $test_name {
            use super::*;

            #[test]
            fn test_value_conversion() {
                let value_instance: $ty = Default::default();
                let value: Value = value_instance.clone().into();
                assert_eq!(value.$name(), Some(&value_instance));
            }
        }
    };
}

macro_rules! value_from_primitive {
    ($variant:ident, $primitive:ty, $test_name:ident) => {
        impl From<$primitive> for Value {
            fn from(value: $primitive) -> Self {
                Value::$variant(value.into())
            }
        }

        #[cfg(test)]
        mod $test_name {
            use super::*;

            #[test]
            fn test_value_from_primitive() {
                let primitive_value: $primitive = Default::default();
                assert!(matches!(Value::from(primitive_value), Value::$variant(_)));
            }
        }
    };
}

impl_conv_for_value!(Boolean, bool, as_boolean, tests_boolean);
impl_conv_for_value!(Integer, i64, as_integer, tests_integer);
impl_conv_for_value!(Decimal, Decimal, as_decimal, tests_decimal);
impl_conv_for_value!(Text, String, as_text, tests_text);
impl_conv_for_value!(List, Vec<Value>, as_list, tests_list);
impl_conv_for_value!(Map, BTreeMap<String, Value>, as_map, tests_map);

value_from_primitive!(Integer, i8, tests_i8_primitive);
value_from_primitive!(Integer, i16, tests_i16_primitive);
value_from_primitive!(Integer, i32, tests_i32_primitive);
value_from_primitive!(Integer, u8, tests_u8_primitive);
value_from_primitive!(Integer, u16, tests_u16_primitive);
value_from_primitive!(Integer, u32, tests_u32_primitive);
value_from_primitive!(Text, &str, tests_str_primitive);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Value::Integer(v),
            Err(_) => Value::Decimal(Decimal::from(value)),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        match Decimal::try_from(value) {
            Ok(d) => Value::Decimal(d),
            Err(_) => Value::Text(value.to_string()),
        }
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else if let Some(f) = n.as_f64() {
                    Value::from(f)
                } else {
                    Value::Text(n.to_string())
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Checks if the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Checks whether the value counts as "not filled in": null, a whitespace-only text
    /// or an empty collection.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.trim().is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
            Value::Boolean(_) | Value::Integer(_) | Value::Decimal(_) => false,
        }
    }

    /// Returns the numeric value for [`Value::Integer`] and [`Value::Decimal`].
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Value::Integer(i) => Some(Decimal::from(*i)),
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Like [`Value::as_number`], but also parses numeric text.
    pub fn to_number(&self) -> Option<Decimal> {
        match self {
            Value::Text(s) => Decimal::from_str(s.trim()).ok(),
            other => other.as_number(),
        }
    }

    /// Returns the scalar representation used when comparing against rule parameters.
    ///
    /// Booleans are rendered as `1` and `0`. Collections and null have no scalar form.
    pub fn to_scalar_string(&self) -> Option<String> {
        match self {
            Value::Boolean(true) => Some("1".to_string()),
            Value::Boolean(false) => Some("0".to_string()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Decimal(d) => Some(d.normalize().to_string()),
            Value::Text(s) => Some(s.clone()),
            Value::Null | Value::List(_) | Value::Map(_) => None,
        }
    }

    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Integer(_) => "Integer",
            Value::Decimal(_) => "Decimal",
            Value::Text(_) => "Text",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::List(items) => {
                let rendered = items
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{rendered}]")
            }
            Value::Map(map) => {
                let rendered = map
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{rendered}}}")
            }
            scalar => write!(f, "{}", scalar.to_scalar_string().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_null() {
        let int_value: Value = 42i64.into();
        assert!(!int_value.is_null());

        let null_value = Value::Null;
        assert!(null_value.is_null());
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }

    #[test]
    fn test_blank() {
        assert!(Value::Null.is_blank());
        assert!(Value::from("   ").is_blank());
        assert!(Value::List(vec![]).is_blank());
        assert!(!Value::from("a").is_blank());
        assert!(!Value::from(0i32).is_blank());
        assert!(!Value::from(false).is_blank());
    }

    #[test]
    fn test_should_convert_json_values() {
        let json = serde_json::json!({
            "name": "Klaus",
            "age": 42,
            "score": 9.5,
            "tags": ["a", "b"],
            "active": true,
            "nickname": null,
        });

        let Value::Map(map) = Value::from(json) else {
            panic!("expected a map");
        };
        assert_eq!(map["name"], Value::Text("Klaus".to_string()));
        assert_eq!(map["age"], Value::Integer(42));
        assert_eq!(map["score"], Value::Decimal(Decimal::new(95, 1)));
        assert_eq!(
            map["tags"],
            Value::List(vec![Value::from("a"), Value::from("b")])
        );
        assert_eq!(map["active"], Value::Boolean(true));
        assert_eq!(map["nickname"], Value::Null);
    }

    #[test]
    fn test_should_convert_large_unsigned_to_decimal() {
        assert_eq!(Value::from(7u64), Value::Integer(7));
        assert!(matches!(Value::from(u64::MAX), Value::Decimal(_)));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(Value::from(3i32).as_number(), Some(Decimal::from(3)));
        assert_eq!(Value::from("3.50").as_number(), None);
        assert_eq!(Value::from(" 3.50 ").to_number(), Some(Decimal::new(350, 2)));
        assert_eq!(Value::from("abc").to_number(), None);
    }

    #[test]
    fn test_scalar_string() {
        assert_eq!(Value::from(true).to_scalar_string().as_deref(), Some("1"));
        assert_eq!(
            Value::Decimal(Decimal::new(1500, 2)).to_scalar_string().as_deref(),
            Some("15")
        );
        assert_eq!(Value::List(vec![]).to_scalar_string(), None);
    }

    #[test]
    fn test_display() {
        let value = Value::List(vec![Value::from(1i32), Value::from("x"), Value::Null]);
        assert_eq!(value.to_string(), "[1, x, null]");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Null.type_name(), "Null");
        assert_eq!(Value::from("a").type_name(), "Text");
        assert_eq!(Value::from(1i64).type_name(), "Integer");
    }
}
