//! Prelude exposes all the types for `validatable-model` crate, along with the ones of
//! `validatable-rules` needed to declare rules.

pub use validatable_rules::prelude::*;

pub use crate::error::{ValidationError, ValidationFailed, ValidationResult};
pub use crate::state::{ValidationState, ValidationStatus};
pub use crate::validatable::{FailureMode, Validatable};
