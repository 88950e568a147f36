use rust_decimal::Decimal;

use super::Rule;
use super::size::measure;
use crate::fields::FieldValues;
use crate::validate::{
    AlphaDashValidator, AlphaNumValidator, AlphaValidator, EmailValidator, LowercaseValidator,
    UppercaseValidator, UrlValidator, UuidValidator, Validate,
};
use crate::value::Value;

static NULL: Value = Value::Null;

/// Everything a rule needs to check the value of one field.
pub struct RuleContext<'a> {
    /// Name of the field under validation.
    pub attribute: &'a str,
    /// Value of the field; `None` when absent.
    pub value: Option<&'a Value>,
    /// All the values under validation, for rules comparing fields.
    pub data: &'a FieldValues,
    /// Whether the field carries `numeric` or `integer`.
    pub numeric: bool,
}

impl Rule {
    /// Checks the rule against the field described by `ctx`.
    pub(crate) fn passes(&self, ctx: &RuleContext<'_>) -> bool {
        let value = ctx.value.unwrap_or(&NULL);

        match self {
            Rule::Required => ctx.value.is_some_and(|v| !v.is_blank()),
            Rule::Nullable | Rule::Bail => true,
            Rule::String => matches!(value, Value::Text(_)),
            Rule::Integer => is_integer(value),
            Rule::Numeric => value.to_number().is_some(),
            Rule::Boolean => is_boolean(value),
            Rule::Array => matches!(value, Value::List(_) | Value::Map(_)),
            Rule::Email => EmailValidator.validate(value),
            Rule::Url => UrlValidator.validate(value),
            Rule::Uuid => UuidValidator.validate(value),
            Rule::Alpha => AlphaValidator.validate(value),
            Rule::AlphaNum => AlphaNumValidator.validate(value),
            Rule::AlphaDash => AlphaDashValidator.validate(value),
            Rule::Lowercase => LowercaseValidator.validate(value),
            Rule::Uppercase => UppercaseValidator.validate(value),
            Rule::Min(min) => size_check(value, ctx.numeric, |size| size >= *min),
            Rule::Max(max) => size_check(value, ctx.numeric, |size| size <= *max),
            Rule::Between(min, max) => {
                size_check(value, ctx.numeric, |size| size >= *min && size <= *max)
            }
            Rule::Size(expected) => size_check(value, ctx.numeric, |size| size == *expected),
            Rule::In(allowed) => match value {
                Value::List(items) => items.iter().all(|item| is_listed(item, allowed)),
                scalar => is_listed(scalar, allowed),
            },
            Rule::NotIn(denied) => match value {
                Value::List(items) => !items.iter().any(|item| is_listed(item, denied)),
                scalar => !is_listed(scalar, denied),
            },
            Rule::StartsWith(prefixes) => matches!(
                value,
                Value::Text(text) if prefixes.iter().any(|p| text.starts_with(p.as_str()))
            ),
            Rule::EndsWith(suffixes) => matches!(
                value,
                Value::Text(text) if suffixes.iter().any(|s| text.ends_with(s.as_str()))
            ),
            Rule::Regex(pattern) => pattern.validate(value),
            Rule::NotRegex(pattern) => matches!(value, Value::Text(_)) && !pattern.validate(value),
            Rule::Same(other) => ctx.data.get(other) == Some(value),
            Rule::Different(other) => ctx.data.get(other).is_some_and(|o| o != value),
            Rule::Confirmed => {
                ctx.data.get(&format!("{}_confirmation", ctx.attribute)) == Some(value)
            }
            Rule::Custom(rule) => rule.passes(ctx.attribute, value, ctx.data),
        }
    }
}

fn size_check(value: &Value, numeric: bool, check: impl Fn(Decimal) -> bool) -> bool {
    measure(value, numeric).is_some_and(check)
}

fn is_integer(value: &Value) -> bool {
    match value {
        Value::Integer(_) => true,
        Value::Decimal(d) => d.fract().is_zero(),
        Value::Text(text) => text.trim().parse::<i64>().is_ok(),
        _ => false,
    }
}

fn is_boolean(value: &Value) -> bool {
    match value {
        Value::Boolean(_) => true,
        Value::Integer(i) => *i == 0 || *i == 1,
        Value::Text(text) => text == "0" || text == "1",
        _ => false,
    }
}

fn is_listed(value: &Value, list: &[String]) -> bool {
    value
        .to_scalar_string()
        .is_some_and(|scalar| list.iter().any(|item| *item == scalar))
}

#[cfg(test)]
mod tests {

    use super::*;

    fn check(rule: &str, value: impl Into<Value>) -> bool {
        check_numeric(rule, value, false)
    }

    fn check_numeric(rule: &str, value: impl Into<Value>, numeric: bool) -> bool {
        let rule: Rule = rule.parse().unwrap();
        let value = value.into();
        let data = FieldValues::new().with("field", value.clone());
        rule.passes(&RuleContext {
            attribute: "field",
            value: Some(&value),
            data: &data,
            numeric,
        })
    }

    #[test]
    fn test_required() {
        let data = FieldValues::new();
        let absent = RuleContext {
            attribute: "name",
            value: None,
            data: &data,
            numeric: false,
        };
        assert!(!Rule::Required.passes(&absent));
        assert!(!check("required", Value::Null));
        assert!(!check("required", "  "));
        assert!(!check("required", Value::List(vec![])));
        assert!(check("required", "Klaus"));
        assert!(check("required", 0i32));
    }

    #[test]
    fn test_type_rules() {
        assert!(check("string", "a"));
        assert!(!check("string", 1i32));
        assert!(check("integer", 5i32));
        assert!(check("integer", " 42 "));
        assert!(check("integer", Value::Decimal(Decimal::new(500, 2))));
        assert!(!check("integer", Value::Decimal(Decimal::new(501, 2))));
        assert!(!check("integer", "4.2"));
        assert!(check("numeric", "4.2"));
        assert!(!check("numeric", "four"));
        assert!(check("boolean", false));
        assert!(check("boolean", 1i32));
        assert!(check("boolean", "0"));
        assert!(!check("boolean", "yes"));
        assert!(check("array", Value::List(vec![])));
        assert!(!check("array", "a"));
    }

    #[test]
    fn test_size_rules_on_text() {
        assert!(check("max:75", "Test Name For Making tests"));
        assert!(!check("max:3", "Klaus"));
        assert!(check("min:2", "Kl"));
        assert!(!check("min:2", "A"));
        assert!(check("size:6", "Михаил"));
        assert!(check("between:2,5", "Otto"));
        assert!(!check("between:2,3", "Otto"));
    }

    #[test]
    fn test_size_rules_on_numbers() {
        assert!(check("min:18", 21i32));
        assert!(!check("min:18", 17i32));
        assert!(check("max:1.5", Value::Decimal(Decimal::new(15, 1))));
        assert!(check_numeric("min:18", "21", true));
        assert!(!check_numeric("min:18", "9", true));
        assert!(!check("min:2", "9"));
        assert!(!check("min:1", Value::Null));
        assert!(!check("max:1", true));
    }

    #[test]
    fn test_size_rules_on_lists() {
        let list = Value::List(vec![Value::from("a"), Value::from("b")]);
        assert!(check("size:2", list.clone()));
        assert!(!check("max:1", list));
    }

    #[test]
    fn test_membership_rules() {
        assert!(check("in:admin,editor", "admin"));
        assert!(!check("in:admin,editor", "root"));
        assert!(check("in:0,1", true));
        assert!(check(
            "in:a,b",
            Value::List(vec![Value::from("a"), Value::from("b")])
        ));
        assert!(!check("in:a,b", Value::List(vec![Value::from("c")])));
        assert!(!check("in:a", Value::Null));
        assert!(check("not_in:root", "admin"));
        assert!(!check("not_in:root", "root"));
        assert!(check("not_in:root", Value::Null));
    }

    #[test]
    fn test_affix_rules() {
        assert!(check("starts_with:dev,ops", "developer"));
        assert!(!check("starts_with:ops", "developer"));
        assert!(check("ends_with:.com", "gmail.com"));
        assert!(!check("ends_with:.com", 1i32));
    }

    #[test]
    fn test_pattern_rules() {
        assert!(check("regex:/^[a-z]+$/", "klaus"));
        assert!(!check("regex:/^[a-z]+$/", 1i32));
        assert!(check("not_regex:/[-`']{2,}/", "Klaus"));
        assert!(!check("not_regex:/[-`']{2,}/", "```"));
        assert!(!check("not_regex:/x/", 1i32));
    }

    #[test]
    fn test_field_comparison_rules() {
        let data = FieldValues::new()
            .with("password", "s3cret")
            .with("password_confirmation", "s3cret")
            .with("username", "klaus");
        let password = Value::from("s3cret");
        let ctx = RuleContext {
            attribute: "password",
            value: Some(&password),
            data: &data,
            numeric: false,
        };

        assert!(Rule::Confirmed.passes(&ctx));
        assert!(Rule::Same("password_confirmation".to_string()).passes(&ctx));
        assert!(Rule::Different("username".to_string()).passes(&ctx));
        assert!(!Rule::Different("missing".to_string()).passes(&ctx));
        assert!(!Rule::Same("username".to_string()).passes(&ctx));
    }

    #[test]
    fn test_format_rules() {
        assert!(check("email", "developer2-test@gmail.com"));
        assert!(!check("email", "test.com"));
        assert!(check("url", "https://example.com"));
        assert!(check("uuid", "550e8400-e29b-41d4-a716-446655440000"));
        assert!(check("alpha", "Klaus"));
        assert!(check("alpha_num", "Klaus2"));
        assert!(check("alpha_dash", "klaus-2_x"));
        assert!(check("lowercase", "klaus"));
        assert!(check("uppercase", "KLAUS"));
    }
}
