use std::fmt;

use crate::fields::FieldValues;
use crate::value::Value;

/// Trait for user-defined rules, evaluated alongside the built-in ones.
///
/// ```rust
/// use validatable_rules::prelude::{FieldRule, FieldValues, Rule, RuleSpec, Validator, Value};
///
/// #[derive(Debug)]
/// struct Even;
///
/// impl FieldRule for Even {
///     fn name(&self) -> &str {
///         "even"
///     }
///
///     fn passes(&self, _attribute: &str, value: &Value, _data: &FieldValues) -> bool {
///         matches!(value, Value::Integer(i) if i % 2 == 0)
///     }
///
///     fn message(&self) -> String {
///         "The :attribute field must be even.".to_string()
///     }
/// }
///
/// let rules = RuleSpec::new().field("count", vec![Rule::Integer, Rule::custom(Even)]);
/// let validator = Validator::make(FieldValues::new().with("count", 3i64), rules).unwrap();
/// assert_eq!(validator.errors().first("count"), Some("The count field must be even."));
/// ```
pub trait FieldRule: fmt::Debug + Send + Sync {
    /// Name used to look up custom messages.
    fn name(&self) -> &str;

    /// Checks `value`, the value of `attribute`; `data` holds every field under validation.
    ///
    /// Absent fields are passed as [`Value::Null`], which only happens for implicit rules.
    fn passes(&self, attribute: &str, value: &Value, data: &FieldValues) -> bool;

    /// Default message template, with an `:attribute` placeholder.
    fn message(&self) -> String;

    /// Implicit rules run even when the field is absent or blank.
    fn implicit(&self) -> bool {
        false
    }
}

type Check = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// A [`FieldRule`] backed by a closure over the field value.
pub struct ClosureRule {
    name: String,
    message: String,
    implicit: bool,
    check: Check,
}

impl ClosureRule {
    pub fn new<F>(name: impl Into<String>, message: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            message: message.into(),
            implicit: false,
            check: Box::new(check),
        }
    }

    /// Makes the rule run on absent and blank fields too.
    pub fn into_implicit(mut self) -> Self {
        self.implicit = true;
        self
    }
}

impl fmt::Debug for ClosureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureRule")
            .field("name", &self.name)
            .field("implicit", &self.implicit)
            .finish_non_exhaustive()
    }
}

impl FieldRule for ClosureRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn passes(&self, _attribute: &str, value: &Value, _data: &FieldValues) -> bool {
        (self.check)(value)
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn implicit(&self) -> bool {
        self.implicit
    }
}
