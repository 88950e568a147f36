#![crate_name = "validatable_rules"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Validatable Rules
//!
//! This crate is the rule engine behind `validatable-model`: it compiles declarative field rules
//! and evaluates them against field values, collecting an error message for every failed rule.
//!
//! You can import all the useful types and traits by using the prelude module:
//!
//! ```rust
//! use validatable_rules::prelude::*;
//! ```
//!
//! ## Types
//!
//! ### Rules
//!
//! - [`ClosureRule`](crate::prelude::ClosureRule)
//! - [`Constraint`](crate::prelude::Constraint)
//! - [`FieldRule`](crate::prelude::FieldRule)
//! - [`IntoConstraints`](crate::prelude::IntoConstraints)
//! - [`Rule`](crate::prelude::Rule)
//! - [`RuleError`](crate::prelude::RuleError)
//! - [`RuleSpec`](crate::prelude::RuleSpec)
//! - [`RulesResult`](crate::prelude::RulesResult)
//!
//! ### Validator
//!
//! - [`Validator`](crate::prelude::Validator)
//! - [`ValidatorBuilder`](crate::prelude::ValidatorBuilder)
//!
//! ### Messages
//!
//! - [`AttributeNames`](crate::prelude::AttributeNames)
//! - [`CustomMessages`](crate::prelude::CustomMessages)
//! - [`MessageBag`](crate::prelude::MessageBag)
//!
//! ### Validate
//!
//! - [`Validate`](crate::prelude::Validate)
//! - [`AlphaDashValidator`](crate::prelude::AlphaDashValidator)
//! - [`AlphaNumValidator`](crate::prelude::AlphaNumValidator)
//! - [`AlphaValidator`](crate::prelude::AlphaValidator)
//! - [`EmailValidator`](crate::prelude::EmailValidator)
//! - [`LowercaseValidator`](crate::prelude::LowercaseValidator)
//! - [`PatternValidator`](crate::prelude::PatternValidator)
//! - [`UppercaseValidator`](crate::prelude::UppercaseValidator)
//! - [`UrlValidator`](crate::prelude::UrlValidator)
//! - [`UuidValidator`](crate::prelude::UuidValidator)
//!
//! ### Value
//!
//! - [`FieldValues`](crate::prelude::FieldValues)
//! - [`Value`](crate::prelude::Value)
//!

#![doc(html_playground_url = "https://play.rust-lang.org")]

mod error;
mod fields;
mod messages;
pub mod prelude;
mod rule;
mod spec;
mod validate;
mod validator;
mod value;
