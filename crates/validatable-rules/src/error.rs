use thiserror::Error;

/// Errors raised while compiling a [`crate::prelude::RuleSpec`] or building
/// [`crate::prelude::FieldValues`].
///
/// These never describe a validation failure: a field failing its rules is
/// reported through the [`crate::prelude::MessageBag`].
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Unknown validation rule '{0}'")]
    UnknownRule(String),
    #[error("Validation rule '{rule}' requires at least {expected} parameter(s)")]
    MissingParameter { rule: String, expected: usize },
    #[error("Invalid parameter '{parameter}' for validation rule '{rule}'")]
    InvalidParameter { rule: String, parameter: String },
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Field values must serialize to an object, got {0}")]
    NotAnObject(&'static str),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Rules Result type
pub type RulesResult<T> = Result<T, RuleError>;
