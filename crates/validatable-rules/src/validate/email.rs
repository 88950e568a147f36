use lazy_regex::{Lazy, Regex, lazy_regex};

use crate::prelude::{Validate, Value};

static EMAIL_REGEX: Lazy<Regex> =
    lazy_regex!(r"^[A-Za-z0-9]{1}[A-Za-z0-9._%+-]*@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$");

/// A validator for email addresses.
///
/// This validator checks if a given text value conforms to a standard email format.
///
/// # Examples
///
/// ```rust
/// use validatable_rules::prelude::{EmailValidator, Validate, Value};
///
/// let validator = EmailValidator;
/// assert!(validator.validate(&Value::from("developer2-test@gmail.com")));
/// assert!(!validator.validate(&Value::from("test.com")));
/// ```
pub struct EmailValidator;

impl Validate for EmailValidator {
    fn validate(&self, value: &Value) -> bool {
        let Value::Text(text) = value else {
            return false;
        };

        EMAIL_REGEX.is_match(text)
    }
}
