#![crate_name = "validatable_model"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Validatable Model
//!
//! This crate lets an entity validate its own fields against the rules it declares, either
//! raising a [`ValidationError`](crate::prelude::ValidationError) or collecting the field
//! messages on the entity itself.
//!
//! You can import all the useful types and traits by using the prelude module:
//!
//! ```rust
//! use validatable_model::prelude::*;
//! ```
//!
//! ## Types
//!
//! ### Validatable
//!
//! - [`FailureMode`](crate::prelude::FailureMode)
//! - [`Validatable`](crate::prelude::Validatable)
//! - [`ValidationState`](crate::prelude::ValidationState)
//! - [`ValidationStatus`](crate::prelude::ValidationStatus)
//!
//! ### Errors
//!
//! - [`ValidationError`](crate::prelude::ValidationError)
//! - [`ValidationFailed`](crate::prelude::ValidationFailed)
//! - [`ValidationResult`](crate::prelude::ValidationResult)
//!
//! ### Rules
//!
//! The rule types of `validatable-rules` are re-exported by the prelude, most notably:
//!
//! - [`FieldValues`](crate::prelude::FieldValues)
//! - [`MessageBag`](crate::prelude::MessageBag)
//! - [`RuleSpec`](crate::prelude::RuleSpec)
//! - [`Value`](crate::prelude::Value)
//!

#![doc(html_playground_url = "https://play.rust-lang.org")]

mod error;
pub mod prelude;
mod state;
mod validatable;
