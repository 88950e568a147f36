//! This module contains [`Rule`], a single compiled validation constraint.
//!
//! Rules are usually written as descriptors, like `"required"` or `"max:75"`, and parsed with
//! [`str::parse`]. Custom rules implement [`FieldRule`].

mod custom;
mod eval;
mod parse;
mod size;

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

pub use self::custom::{ClosureRule, FieldRule};
pub(crate) use self::eval::RuleContext;
pub(crate) use self::parse::parse_descriptor;
pub(crate) use self::size::SizeKind;
use crate::error::RulesResult;
use crate::messages::AttributeNames;
use crate::validate::PatternValidator;

/// A single validation constraint applied to a field.
#[derive(Debug, Clone)]
pub enum Rule {
    /// The field must be present and not blank.
    Required,
    /// Other rules are skipped when the value is null.
    Nullable,
    /// Stops evaluating the field after its first failure.
    Bail,
    String,
    Integer,
    Numeric,
    Boolean,
    Array,
    Email,
    Url,
    Uuid,
    Alpha,
    AlphaNum,
    AlphaDash,
    Lowercase,
    Uppercase,
    Min(Decimal),
    Max(Decimal),
    Between(Decimal, Decimal),
    Size(Decimal),
    In(Vec<String>),
    NotIn(Vec<String>),
    StartsWith(Vec<String>),
    EndsWith(Vec<String>),
    Regex(PatternValidator),
    NotRegex(PatternValidator),
    Same(String),
    Different(String),
    /// The field must equal its `<field>_confirmation` companion.
    Confirmed,
    Custom(Arc<dyn FieldRule>),
}

impl Rule {
    pub fn min(min: impl Into<Decimal>) -> Self {
        Self::Min(min.into())
    }

    pub fn max(max: impl Into<Decimal>) -> Self {
        Self::Max(max.into())
    }

    pub fn between(min: impl Into<Decimal>, max: impl Into<Decimal>) -> Self {
        Self::Between(min.into(), max.into())
    }

    pub fn size(size: impl Into<Decimal>) -> Self {
        Self::Size(size.into())
    }

    /// Compiles a delimited pattern into a [`Rule::Regex`].
    pub fn regex(pattern: &str) -> RulesResult<Self> {
        PatternValidator::parse_as("regex", pattern).map(Self::Regex)
    }

    /// Compiles a delimited pattern into a [`Rule::NotRegex`].
    pub fn not_regex(pattern: &str) -> RulesResult<Self> {
        PatternValidator::parse_as("not_regex", pattern).map(Self::NotRegex)
    }

    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::In(values.into_iter().map(Into::into).collect())
    }

    pub fn none_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NotIn(values.into_iter().map(Into::into).collect())
    }

    /// Wraps a [`FieldRule`] implementation.
    pub fn custom(rule: impl FieldRule + 'static) -> Self {
        Self::Custom(Arc::new(rule))
    }

    /// The rule name, as used in descriptors and custom message keys.
    pub fn name(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::Nullable => "nullable",
            Self::Bail => "bail",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Numeric => "numeric",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Email => "email",
            Self::Url => "url",
            Self::Uuid => "uuid",
            Self::Alpha => "alpha",
            Self::AlphaNum => "alpha_num",
            Self::AlphaDash => "alpha_dash",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::Between(..) => "between",
            Self::Size(_) => "size",
            Self::In(_) => "in",
            Self::NotIn(_) => "not_in",
            Self::StartsWith(_) => "starts_with",
            Self::EndsWith(_) => "ends_with",
            Self::Regex(_) => "regex",
            Self::NotRegex(_) => "not_regex",
            Self::Same(_) => "same",
            Self::Different(_) => "different",
            Self::Confirmed => "confirmed",
            Self::Custom(rule) => rule.name(),
        }
    }

    /// Implicit rules run even when the field is absent or blank.
    pub fn is_implicit(&self) -> bool {
        match self {
            Self::Required => true,
            Self::Custom(rule) => rule.implicit(),
            _ => false,
        }
    }

    /// Whether the rule makes size rules compare numeric text by value.
    pub(crate) fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric | Self::Integer)
    }

    /// Message template used when no custom message is registered.
    pub(crate) fn default_message(&self, kind: SizeKind) -> String {
        let template = match (self, kind) {
            (Self::Required, _) => "The :attribute field is required.",
            (Self::Nullable | Self::Bail, _) => "The :attribute field is invalid.",
            (Self::String, _) => "The :attribute field must be a string.",
            (Self::Integer, _) => "The :attribute field must be an integer.",
            (Self::Numeric, _) => "The :attribute field must be a number.",
            (Self::Boolean, _) => "The :attribute field must be true or false.",
            (Self::Array, _) => "The :attribute field must be an array.",
            (Self::Email, _) => "The :attribute field must be a valid email address.",
            (Self::Url, _) => "The :attribute field must be a valid URL.",
            (Self::Uuid, _) => "The :attribute field must be a valid UUID.",
            (Self::Alpha, _) => "The :attribute field must only contain letters.",
            (Self::AlphaNum, _) => "The :attribute field must only contain letters and numbers.",
            (Self::AlphaDash, _) => {
                "The :attribute field must only contain letters, numbers, dashes, and underscores."
            }
            (Self::Lowercase, _) => "The :attribute field must be lowercase.",
            (Self::Uppercase, _) => "The :attribute field must be uppercase.",
            (Self::Min(_), SizeKind::Numeric) => "The :attribute field must be at least :min.",
            (Self::Min(_), SizeKind::String) => {
                "The :attribute field must be at least :min characters."
            }
            (Self::Min(_), SizeKind::Array) => {
                "The :attribute field must have at least :min items."
            }
            (Self::Max(_), SizeKind::Numeric) => {
                "The :attribute field must not be greater than :max."
            }
            (Self::Max(_), SizeKind::String) => {
                "The :attribute field must not be greater than :max characters."
            }
            (Self::Max(_), SizeKind::Array) => {
                "The :attribute field must not have more than :max items."
            }
            (Self::Between(..), SizeKind::Numeric) => {
                "The :attribute field must be between :min and :max."
            }
            (Self::Between(..), SizeKind::String) => {
                "The :attribute field must be between :min and :max characters."
            }
            (Self::Between(..), SizeKind::Array) => {
                "The :attribute field must have between :min and :max items."
            }
            (Self::Size(_), SizeKind::Numeric) => "The :attribute field must be :size.",
            (Self::Size(_), SizeKind::String) => {
                "The :attribute field must be :size characters."
            }
            (Self::Size(_), SizeKind::Array) => "The :attribute field must contain :size items.",
            (Self::In(_) | Self::NotIn(_), _) => "The selected :attribute is invalid.",
            (Self::StartsWith(_), _) => {
                "The :attribute field must start with one of the following: :values."
            }
            (Self::EndsWith(_), _) => {
                "The :attribute field must end with one of the following: :values."
            }
            (Self::Regex(_) | Self::NotRegex(_), _) => "The :attribute field format is invalid.",
            (Self::Same(_), _) => "The :attribute field must match :other.",
            (Self::Different(_), _) => "The :attribute field and :other must be different.",
            (Self::Confirmed, _) => "The :attribute field confirmation does not match.",
            (Self::Custom(rule), _) => return rule.message(),
        };

        template.to_string()
    }

    /// Placeholder values of the rule parameters, other than `:attribute`.
    pub(crate) fn replacements(&self, attributes: &AttributeNames) -> Vec<(&'static str, String)> {
        match self {
            Self::Min(min) => vec![("min", min.normalize().to_string())],
            Self::Max(max) => vec![("max", max.normalize().to_string())],
            Self::Between(min, max) => vec![
                ("min", min.normalize().to_string()),
                ("max", max.normalize().to_string()),
            ],
            Self::Size(size) => vec![("size", size.normalize().to_string())],
            Self::In(values)
            | Self::NotIn(values)
            | Self::StartsWith(values)
            | Self::EndsWith(values) => vec![("values", values.join(", "))],
            Self::Same(other) | Self::Different(other) => {
                vec![("other", attributes.display(other))]
            }
            _ => Vec::new(),
        }
    }
}

impl From<ClosureRule> for Rule {
    fn from(rule: ClosureRule) -> Self {
        Self::custom(rule)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            Self::Min(n) | Self::Max(n) | Self::Size(n) => write!(f, "{name}:{}", n.normalize()),
            Self::Between(min, max) => {
                write!(f, "{name}:{},{}", min.normalize(), max.normalize())
            }
            Self::In(values)
            | Self::NotIn(values)
            | Self::StartsWith(values)
            | Self::EndsWith(values) => write!(f, "{name}:{}", values.join(",")),
            Self::Regex(pattern) | Self::NotRegex(pattern) => write!(f, "{name}:{pattern}"),
            Self::Same(other) | Self::Different(other) => write!(f, "{name}:{other}"),
            _ => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_name_rules() {
        assert_eq!(Rule::Required.name(), "required");
        assert_eq!(Rule::AlphaDash.name(), "alpha_dash");
        assert_eq!(Rule::max(75).name(), "max");
        assert_eq!(Rule::regex("/a/").unwrap().name(), "regex");
    }

    #[test]
    fn test_should_display_descriptors() {
        assert_eq!(Rule::max(75).to_string(), "max:75");
        assert_eq!(Rule::between(2, 10).to_string(), "between:2,10");
        assert_eq!(Rule::one_of(["a", "b"]).to_string(), "in:a,b");
        assert_eq!(Rule::not_regex("/[-`']{2,}/").unwrap().to_string(), "not_regex:/[-`']{2,}/");
        assert_eq!(Rule::Email.to_string(), "email");
    }

    #[test]
    fn test_should_mark_implicit_rules() {
        assert!(Rule::Required.is_implicit());
        assert!(!Rule::Email.is_implicit());
        let implicit = ClosureRule::new("accepted", "The :attribute must be accepted.", |value| {
            value == &crate::value::Value::Boolean(true)
        })
        .into_implicit();
        assert!(Rule::from(implicit).is_implicit());
    }

    #[test]
    fn test_should_name_rule_of_malformed_pattern() {
        assert!(matches!(
            Rule::not_regex("[a-z]+"),
            Err(crate::error::RuleError::InvalidParameter { rule, .. }) if rule == "not_regex"
        ));
        assert!(matches!(
            "not_regex:/abc/D".parse::<Rule>(),
            Err(crate::error::RuleError::InvalidParameter { rule, .. }) if rule == "not_regex"
        ));
    }

    #[test]
    fn test_should_pick_message_by_size_kind() {
        assert_eq!(
            Rule::max(75).default_message(SizeKind::String),
            "The :attribute field must not be greater than :max characters."
        );
        assert_eq!(
            Rule::max(75).default_message(SizeKind::Numeric),
            "The :attribute field must not be greater than :max."
        );
        assert_eq!(
            Rule::min(1).default_message(SizeKind::Array),
            "The :attribute field must have at least :min items."
        );
    }

    #[test]
    fn test_should_list_replacements() {
        let attributes = AttributeNames::new().with("password", "secret");
        assert_eq!(
            Rule::between(2, 75).replacements(&attributes),
            vec![("min", "2".to_string()), ("max", "75".to_string())]
        );
        assert_eq!(
            Rule::Same("password".to_string()).replacements(&attributes),
            vec![("other", "secret".to_string())]
        );
        assert!(Rule::Email.replacements(&attributes).is_empty());
    }
}
