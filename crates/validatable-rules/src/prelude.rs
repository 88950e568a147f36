//! Prelude exposes all the types for `validatable-rules` crate.

pub use crate::error::{RuleError, RulesResult};
pub use crate::fields::FieldValues;
pub use crate::messages::{AttributeNames, CustomMessages, MessageBag};
pub use crate::rule::{ClosureRule, FieldRule, Rule};
pub use crate::spec::{Constraint, IntoConstraints, RuleSpec};
pub use crate::validate::*;
pub use crate::validator::{Validator, ValidatorBuilder};
pub use crate::value::Value;
