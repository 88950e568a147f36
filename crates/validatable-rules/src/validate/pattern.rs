use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::{RuleError, RulesResult};
use crate::prelude::{Validate, Value};

/// A validator matching text against a regular expression.
///
/// Patterns are written in delimited form, `/pattern/flags`, where the delimiter is any
/// non-alphanumeric character (bracket pairs such as `{pattern}` are accepted too).
/// Supported flags are `i`, `m`, `s`, `x` and `u`; `u` is accepted for compatibility since
/// matching is always unicode-aware.
///
/// The match is unanchored: anchors must be part of the pattern.
///
/// # Example
///
/// ```rust
/// use validatable_rules::prelude::{PatternValidator, Validate, Value};
///
/// let validator = PatternValidator::parse(r"/^([\p{L}'`]*[\s\-]?){1,3}$/u").unwrap();
/// assert!(validator.validate(&Value::from("Jeanne d'Arc")));
/// assert!(!validator.validate(&Value::from("Test Name For Making tests")));
/// ```
#[derive(Debug, Clone)]
pub struct PatternValidator {
    source: String,
    regex: Regex,
}

impl PatternValidator {
    /// Compiles a delimited pattern, such as `/^[a-z]+$/i`.
    pub fn parse(descriptor: &str) -> RulesResult<Self> {
        Self::parse_as("regex", descriptor)
    }

    /// Like [`PatternValidator::parse`], reporting malformed descriptors against `rule`.
    pub(crate) fn parse_as(rule: &str, descriptor: &str) -> RulesResult<Self> {
        let (body, flags) = split_delimited(rule, descriptor)?;

        let mut builder = RegexBuilder::new(body);
        for flag in flags.chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'x' => builder.ignore_whitespace(true),
                'u' => &mut builder,
                _ => return Err(invalid_pattern_parameter(rule, descriptor)),
            };
        }

        let regex = builder.build().map_err(|source| RuleError::InvalidPattern {
            pattern: descriptor.to_string(),
            source,
        })?;

        Ok(Self {
            source: descriptor.to_string(),
            regex,
        })
    }

    /// Wraps an already compiled [`Regex`].
    pub fn new(regex: Regex) -> Self {
        Self {
            source: format!("/{}/", regex.as_str()),
            regex,
        }
    }

    /// The pattern as it was written.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Validate for PatternValidator {
    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Text(text) if self.regex.is_match(text))
    }
}

impl fmt::Display for PatternValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl PartialEq for PatternValidator {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Splits `/body/flags` into its body and flags.
fn split_delimited<'a>(rule: &str, descriptor: &'a str) -> RulesResult<(&'a str, &'a str)> {
    let mut chars = descriptor.chars();
    let Some(open) = chars.next() else {
        return Err(invalid_pattern_parameter(rule, descriptor));
    };
    if open.is_alphanumeric() || open.is_whitespace() || open == '\\' {
        return Err(invalid_pattern_parameter(rule, descriptor));
    }

    let close = match open {
        '(' => ')',
        '{' => '}',
        '[' => ']',
        '<' => '>',
        other => other,
    };

    let rest = &descriptor[open.len_utf8()..];
    let Some(end) = rest.rfind(close) else {
        return Err(invalid_pattern_parameter(rule, descriptor));
    };

    Ok((&rest[..end], &rest[end + close.len_utf8()..]))
}

fn invalid_pattern_parameter(rule: &str, descriptor: &str) -> RuleError {
    RuleError::InvalidParameter {
        rule: rule.to_string(),
        parameter: descriptor.to_string(),
    }
}
