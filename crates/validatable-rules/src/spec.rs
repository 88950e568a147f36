use tracing::trace;

use crate::error::RulesResult;
use crate::rule::{ClosureRule, Rule, parse_descriptor};

/// One entry of a [`RuleSpec`]: either a descriptor, parsed when the rules are compiled, or an
/// already compiled [`Rule`].
#[derive(Debug, Clone)]
pub enum Constraint {
    /// A descriptor such as `"required"`, `"max:75"` or `"required|max:75"`.
    Descriptor(String),
    Rule(Rule),
}

impl From<&str> for Constraint {
    fn from(descriptor: &str) -> Self {
        Self::Descriptor(descriptor.to_string())
    }
}

impl From<String> for Constraint {
    fn from(descriptor: String) -> Self {
        Self::Descriptor(descriptor)
    }
}

impl From<Rule> for Constraint {
    fn from(rule: Rule) -> Self {
        Self::Rule(rule)
    }
}

impl From<ClosureRule> for Constraint {
    fn from(rule: ClosureRule) -> Self {
        Self::Rule(rule.into())
    }
}

/// Conversion into the list of constraints of a field.
///
/// Implemented for single descriptors and rules, and for lists of them.
pub trait IntoConstraints {
    fn into_constraints(self) -> Vec<Constraint>;
}

impl IntoConstraints for &str {
    fn into_constraints(self) -> Vec<Constraint> {
        vec![self.into()]
    }
}

impl IntoConstraints for String {
    fn into_constraints(self) -> Vec<Constraint> {
        vec![self.into()]
    }
}

impl IntoConstraints for Rule {
    fn into_constraints(self) -> Vec<Constraint> {
        vec![self.into()]
    }
}

impl IntoConstraints for Constraint {
    fn into_constraints(self) -> Vec<Constraint> {
        vec![self]
    }
}

impl<T> IntoConstraints for Vec<T>
where
    T: Into<Constraint>,
{
    fn into_constraints(self) -> Vec<Constraint> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T, const N: usize> IntoConstraints for [T; N]
where
    T: Into<Constraint>,
{
    fn into_constraints(self) -> Vec<Constraint> {
        self.into_iter().map(Into::into).collect()
    }
}

/// The declarative rules of an entity: field name to ordered constraints.
///
/// Fields are evaluated in the order they were added.
///
/// ```rust
/// use validatable_rules::prelude::{Rule, RuleSpec};
///
/// let rules = RuleSpec::new()
///     .field("name", ["required", "max:75", "min:2"])
///     .field("email", "required|email")
///     .field("age", vec![Rule::Integer, Rule::min(18)]);
///
/// assert_eq!(rules.len(), 3);
/// assert_eq!(rules.fields().collect::<Vec<_>>(), vec!["name", "email", "age"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSpec {
    fields: Vec<(String, Vec<Constraint>)>,
}

/// A [`RuleSpec`] whose descriptors have all been parsed.
pub(crate) type CompiledRules = Vec<(String, Vec<Rule>)>;

impl RuleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds constraints to `field`, after the ones it already has.
    pub fn field(mut self, field: impl Into<String>, constraints: impl IntoConstraints) -> Self {
        self.add(field, constraints);
        self
    }

    /// Adds constraints to `field`, after the ones it already has.
    pub fn add(&mut self, field: impl Into<String>, constraints: impl IntoConstraints) {
        let field = field.into();
        let constraints = constraints.into_constraints();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => existing.extend(constraints),
            None => self.fields.push((field, constraints)),
        }
    }

    /// Returns the constraints of `field`, if it has any.
    pub fn get(&self, field: &str) -> Option<&[Constraint]> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, constraints)| constraints.as_slice())
    }

    /// Returns the fields with constraints, in evaluation order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses every descriptor.
    pub(crate) fn compile(&self) -> RulesResult<CompiledRules> {
        self.fields
            .iter()
            .map(|(field, constraints)| {
                let mut rules = Vec::with_capacity(constraints.len());
                for constraint in constraints {
                    match constraint {
                        Constraint::Descriptor(descriptor) => {
                            rules.extend(parse_descriptor(descriptor)?)
                        }
                        Constraint::Rule(rule) => rules.push(rule.clone()),
                    }
                }
                trace!(field = %field, rules = rules.len(), "compiled field rules");
                Ok((field.clone(), rules))
            })
            .collect()
    }
}

impl<K, C> FromIterator<(K, C)> for RuleSpec
where
    K: Into<String>,
    C: IntoConstraints,
{
    fn from_iter<I: IntoIterator<Item = (K, C)>>(iter: I) -> Self {
        let mut spec = RuleSpec::new();
        for (field, constraints) in iter {
            spec.add(field, constraints);
        }
        spec
    }
}
