use lazy_regex::{Lazy, Regex, lazy_regex};

use crate::prelude::{Validate, Value};

static ALPHA_REGEX: Lazy<Regex> = lazy_regex!(r"^[\pL\pM]+$");
static ALPHA_NUM_REGEX: Lazy<Regex> = lazy_regex!(r"^[\pL\pM\pN]+$");
static ALPHA_DASH_REGEX: Lazy<Regex> = lazy_regex!(r"^[\pL\pM\pN_-]+$");

/// A validator for text made only of letters, in any script.
///
/// # Example
///
/// ```rust
/// use validatable_rules::prelude::{AlphaValidator, Validate, Value};
/// assert!(AlphaValidator.validate(&Value::from("Михаил")));
/// assert!(!AlphaValidator.validate(&Value::from("Klaus 2")));
/// ```
pub struct AlphaValidator;

impl Validate for AlphaValidator {
    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Text(text) if ALPHA_REGEX.is_match(text))
    }
}

/// A validator for text made of letters and numbers.
///
/// Integers are accepted as they are made of digits only.
pub struct AlphaNumValidator;

impl Validate for AlphaNumValidator {
    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Text(text) => ALPHA_NUM_REGEX.is_match(text),
            Value::Integer(i) => *i >= 0,
            _ => false,
        }
    }
}

/// A validator for text made of letters, numbers, dashes and underscores.
pub struct AlphaDashValidator;

impl Validate for AlphaDashValidator {
    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Text(text) => ALPHA_DASH_REGEX.is_match(text),
            Value::Integer(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_alpha_validator() {
        assert!(AlphaValidator.validate(&Value::from("Klaus")));
        assert!(AlphaValidator.validate(&Value::from("Пупкін")));
        assert!(!AlphaValidator.validate(&Value::from("Otto von")));
        assert!(!AlphaValidator.validate(&Value::from("")));
        assert!(!AlphaValidator.validate(&Value::Integer(1)));
    }

    #[test]
    fn test_alpha_num_validator() {
        assert!(AlphaNumValidator.validate(&Value::from("developer2")));
        assert!(AlphaNumValidator.validate(&Value::Integer(42)));
        assert!(!AlphaNumValidator.validate(&Value::Integer(-42)));
        assert!(!AlphaNumValidator.validate(&Value::from("developer-2")));
    }

    #[test]
    fn test_alpha_dash_validator() {
        assert!(AlphaDashValidator.validate(&Value::from("developer2-test_x")));
        assert!(AlphaDashValidator.validate(&Value::Integer(-1)));
        assert!(!AlphaDashValidator.validate(&Value::from("developer test")));
        assert!(!AlphaDashValidator.validate(&Value::Boolean(true)));
    }
}
