use crate::prelude::{Validate, Value};

/// A validator for text without uppercase letters.
///
/// # Example
///
/// ```rust
/// use validatable_rules::prelude::{LowercaseValidator, Validate, Value};
/// assert!(LowercaseValidator.validate(&Value::from("klaus")));
/// assert!(!LowercaseValidator.validate(&Value::from("Klaus")));
/// ```
pub struct LowercaseValidator;

impl Validate for LowercaseValidator {
    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Text(text) if *text == text.to_lowercase())
    }
}

/// A validator for text without lowercase letters.
///
/// # Example
///
/// ```rust
/// use validatable_rules::prelude::{UppercaseValidator, Validate, Value};
/// assert!(UppercaseValidator.validate(&Value::from("KLAUS")));
/// assert!(!UppercaseValidator.validate(&Value::from("Klaus")));
/// ```
pub struct UppercaseValidator;

impl Validate for UppercaseValidator {
    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Text(text) if *text == text.to_uppercase())
    }
}
