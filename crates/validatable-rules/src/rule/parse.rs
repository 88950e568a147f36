use std::str::FromStr;

use rust_decimal::Decimal;

use super::Rule;
use crate::error::{RuleError, RulesResult};
use crate::validate::PatternValidator;

impl FromStr for Rule {
    type Err = RuleError;

    /// Parses a single rule descriptor, such as `required`, `max:75` or `in:a,b,c`.
    ///
    /// Everything after the first `:` is the parameter list; `regex` and `not_regex` take it
    /// verbatim as their pattern, the others split it on `,`.
    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let (name, parameters) = match descriptor.split_once(':') {
            Some((name, parameters)) => (name.trim(), Some(parameters)),
            None => (descriptor.trim(), None),
        };

        let rule = match name {
            "required" => Rule::Required,
            "nullable" => Rule::Nullable,
            "bail" => Rule::Bail,
            "string" => Rule::String,
            "integer" => Rule::Integer,
            "numeric" => Rule::Numeric,
            "boolean" => Rule::Boolean,
            "array" => Rule::Array,
            "email" => Rule::Email,
            "url" => Rule::Url,
            "uuid" => Rule::Uuid,
            "alpha" => Rule::Alpha,
            "alpha_num" => Rule::AlphaNum,
            "alpha_dash" => Rule::AlphaDash,
            "lowercase" => Rule::Lowercase,
            "uppercase" => Rule::Uppercase,
            "confirmed" => Rule::Confirmed,
            "min" => Rule::Min(number(name, &list(name, parameters, 1)?[0])?),
            "max" => Rule::Max(number(name, &list(name, parameters, 1)?[0])?),
            "size" => Rule::Size(number(name, &list(name, parameters, 1)?[0])?),
            "between" => {
                let bounds = list(name, parameters, 2)?;
                Rule::Between(number(name, &bounds[0])?, number(name, &bounds[1])?)
            }
            "in" => Rule::In(list(name, parameters, 1)?),
            "not_in" => Rule::NotIn(list(name, parameters, 1)?),
            "starts_with" => Rule::StartsWith(list(name, parameters, 1)?),
            "ends_with" => Rule::EndsWith(list(name, parameters, 1)?),
            "same" => Rule::Same(single(name, parameters)?),
            "different" => Rule::Different(single(name, parameters)?),
            "regex" => {
                Rule::Regex(PatternValidator::parse_as(name, pattern(name, parameters)?)?)
            }
            "not_regex" => {
                Rule::NotRegex(PatternValidator::parse_as(name, pattern(name, parameters)?)?)
            }
            unknown => return Err(RuleError::UnknownRule(unknown.to_string())),
        };

        Ok(rule)
    }
}

/// Parses a descriptor holding one or more `|`-separated rules.
///
/// `regex` and `not_regex` descriptors are never split, as their pattern may contain `|`.
pub(crate) fn parse_descriptor(descriptor: &str) -> RulesResult<Vec<Rule>> {
    let descriptor = descriptor.trim();
    if descriptor.starts_with("regex:") || descriptor.starts_with("not_regex:") {
        return Ok(vec![descriptor.parse()?]);
    }

    descriptor
        .split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::parse)
        .collect()
}

/// Splits the parameters on `,`, requiring at least `expected` non-empty entries.
fn list(rule: &str, parameters: Option<&str>, expected: usize) -> RulesResult<Vec<String>> {
    let values: Vec<String> = parameters
        .map(|p| {
            p.split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if values.len() < expected {
        return Err(RuleError::MissingParameter {
            rule: rule.to_string(),
            expected,
        });
    }

    Ok(values)
}

fn single(rule: &str, parameters: Option<&str>) -> RulesResult<String> {
    list(rule, parameters, 1).map(|mut values| values.swap_remove(0))
}

fn pattern<'a>(rule: &str, parameters: Option<&'a str>) -> RulesResult<&'a str> {
    match parameters.map(str::trim) {
        Some(pattern) if !pattern.is_empty() => Ok(pattern),
        _ => Err(RuleError::MissingParameter {
            rule: rule.to_string(),
            expected: 1,
        }),
    }
}

fn number(rule: &str, parameter: &str) -> RulesResult<Decimal> {
    Decimal::from_str(parameter).map_err(|_| RuleError::InvalidParameter {
        rule: rule.to_string(),
        parameter: parameter.to_string(),
    })
}
