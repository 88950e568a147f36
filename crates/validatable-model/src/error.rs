use std::fmt;

use thiserror::Error;
use validatable_rules::prelude::{MessageBag, RuleError};

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The entity failed its rules while validating in [`crate::prelude::FailureMode::Throw`].
    #[error("Validation failed: {0}")]
    Failed(ValidationFailed),
    /// The rules of the entity could not be compiled.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl From<ValidationFailed> for ValidationError {
    fn from(failed: ValidationFailed) -> Self {
        Self::Failed(failed)
    }
}

impl ValidationError {
    /// Returns the failed-rule messages, if this is a validation failure.
    pub fn errors(&self) -> Option<&MessageBag> {
        match self {
            Self::Failed(failed) => Some(failed.errors()),
            Self::Rule(_) => None,
        }
    }
}

/// The field messages of an entity that failed validation.
///
/// It carries the whole [`MessageBag`], so the messages can be inspected without the entity
/// that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailed {
    errors: MessageBag,
}

impl ValidationFailed {
    pub fn new(errors: MessageBag) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &MessageBag {
        &self.errors
    }

    pub fn into_errors(self) -> MessageBag {
        self.errors
    }
}

impl fmt::Display for ValidationFailed {
    /// Shows the first message, followed by the count of the other ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.errors.first_message() else {
            return write!(f, "The given data was invalid.");
        };
        write!(f, "{first}")?;

        match self.errors.len() - 1 {
            0 => Ok(()),
            1 => write!(f, " (and 1 more error)"),
            more => write!(f, " (and {more} more errors)"),
        }
    }
}

impl std::error::Error for ValidationFailed {}

/// Validation Result type
pub type ValidationResult<T> = Result<T, ValidationError>;
