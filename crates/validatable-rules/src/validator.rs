//! This module contains the [`Validator`], which evaluates a [`RuleSpec`] against
//! [`FieldValues`].

use tracing::{debug, trace, warn};

use crate::error::RulesResult;
use crate::fields::FieldValues;
use crate::messages::{AttributeNames, CustomMessages, MessageBag, render};
use crate::rule::{Rule, RuleContext, SizeKind};
use crate::spec::RuleSpec;
use crate::value::Value;

/// Evaluates a [`RuleSpec`] against a set of [`FieldValues`].
///
/// Evaluation happens once, when the validator is built; the outcome can then be inspected
/// any number of times.
///
/// ```rust
/// use validatable_rules::prelude::{FieldValues, RuleSpec, Validator};
///
/// let rules = RuleSpec::new()
///     .field("name", "required|min:2")
///     .field("email", "email");
/// let fields = FieldValues::new().with("name", "A").with("email", "s");
///
/// let validator = Validator::make(fields, rules).unwrap();
/// assert!(validator.fails());
/// assert_eq!(
///     validator.errors().first("name"),
///     Some("The name field must be at least 2 characters.")
/// );
/// assert_eq!(
///     validator.errors().first("email"),
///     Some("The email field must be a valid email address.")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    data: FieldValues,
    fields: Vec<String>,
    errors: MessageBag,
}

impl Validator {
    /// Compiles `rules` and evaluates them against `data`, using the default messages.
    pub fn make(data: FieldValues, rules: RuleSpec) -> RulesResult<Self> {
        Self::builder(data, rules).build()
    }

    /// Starts building a validator with custom messages or attribute names.
    pub fn builder(data: FieldValues, rules: RuleSpec) -> ValidatorBuilder {
        ValidatorBuilder {
            data,
            rules,
            messages: CustomMessages::default(),
            attributes: AttributeNames::default(),
        }
    }

    /// Returns whether every rule passed.
    pub fn passes(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns whether at least one rule failed.
    pub fn fails(&self) -> bool {
        !self.passes()
    }

    /// Returns the messages of the failed rules.
    pub fn errors(&self) -> &MessageBag {
        &self.errors
    }

    /// Consumes the validator, returning the messages of the failed rules.
    pub fn into_errors(self) -> MessageBag {
        self.errors
    }

    /// Returns the values under validation.
    pub fn data(&self) -> &FieldValues {
        &self.data
    }

    /// Returns the present values of the fields carrying rules.
    pub fn validated(&self) -> FieldValues {
        self.data
            .clone()
            .only(self.fields.iter().map(String::as_str))
    }
}

/// Builder for a [`Validator`].
#[derive(Debug, Clone)]
pub struct ValidatorBuilder {
    data: FieldValues,
    rules: RuleSpec,
    messages: CustomMessages,
    attributes: AttributeNames,
}

impl ValidatorBuilder {
    /// Sets the messages overriding the default ones.
    pub fn messages(mut self, messages: CustomMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Sets the display names of the fields.
    pub fn attributes(mut self, attributes: AttributeNames) -> Self {
        self.attributes = attributes;
        self
    }

    /// Compiles the rules and evaluates them.
    pub fn build(self) -> RulesResult<Validator> {
        let compiled = self.rules.compile().inspect_err(|err| {
            warn!(error = %err, "failed to compile validation rules");
        })?;

        let mut errors = MessageBag::new();
        for (field, rules) in &compiled {
            let field_errors = FieldCheck {
                attribute: field,
                rules,
                data: &self.data,
                messages: &self.messages,
                attributes: &self.attributes,
            }
            .run();
            errors.merge(field_errors);
        }

        debug!(
            fields = compiled.len(),
            failed = errors.field_count(),
            "validation completed"
        );

        Ok(Validator {
            fields: compiled.into_iter().map(|(field, _)| field).collect(),
            data: self.data,
            errors,
        })
    }
}

/// Evaluation of the rules of a single field.
struct FieldCheck<'a> {
    attribute: &'a str,
    rules: &'a [Rule],
    data: &'a FieldValues,
    messages: &'a CustomMessages,
    attributes: &'a AttributeNames,
}

impl FieldCheck<'_> {
    fn run(&self) -> MessageBag {
        let value = self.data.get(self.attribute);
        let ctx = RuleContext {
            attribute: self.attribute,
            value,
            data: self.data,
            numeric: self.rules.iter().any(Rule::is_numeric),
        };
        let bail = self.rules.iter().any(|rule| matches!(rule, Rule::Bail));
        let nullable = self.rules.iter().any(|rule| matches!(rule, Rule::Nullable));

        let mut errors = MessageBag::new();
        for rule in self.rules {
            if !Self::is_validatable(rule, value, nullable) {
                trace!(field = self.attribute, rule = rule.name(), "rule skipped");
                continue;
            }
            if rule.passes(&ctx) {
                continue;
            }

            trace!(field = self.attribute, rule = rule.name(), "rule failed");
            errors.add(self.attribute, self.message(rule, &ctx));
            if bail || rule.is_implicit() {
                break;
            }
        }

        errors
    }

    /// Whether `rule` must run against `value`.
    fn is_validatable(rule: &Rule, value: Option<&Value>, nullable: bool) -> bool {
        if matches!(rule, Rule::Nullable | Rule::Bail) {
            return false;
        }
        if rule.is_implicit() {
            return true;
        }

        match value {
            None => false,
            Some(Value::Text(text)) if text.trim().is_empty() => false,
            Some(Value::Null) => !nullable,
            Some(_) => true,
        }
    }

    fn message(&self, rule: &Rule, ctx: &RuleContext<'_>) -> String {
        let template = match self.messages.find(self.attribute, rule.name()) {
            Some(custom) => custom.to_string(),
            None => rule.default_message(SizeKind::of(ctx.value, ctx.numeric)),
        };

        let mut replacements = vec![("attribute", self.attributes.display(self.attribute))];
        replacements.extend(rule.replacements(self.attributes));

        render(&template, &replacements)
    }
}
