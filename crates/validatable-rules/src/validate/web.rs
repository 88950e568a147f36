use crate::prelude::{Validate, Value};

/// A validator that checks if a string is a valid absolute URL.
///
/// # Example
///
/// ```rust
/// use validatable_rules::prelude::{UrlValidator, Validate, Value};
/// let validator = UrlValidator;
/// assert!(validator.validate(&Value::from("http://example.com")));
/// assert!(!validator.validate(&Value::from("example")));
/// ```
pub struct UrlValidator;

impl Validate for UrlValidator {
    fn validate(&self, value: &Value) -> bool {
        let Value::Text(text) = value else {
            return false;
        };

        url::Url::parse(text).is_ok()
    }
}

/// A validator that checks if a string is a valid UUID.
///
/// # Example
///
/// ```rust
/// use validatable_rules::prelude::{UuidValidator, Validate, Value};
/// let validator = UuidValidator;
/// assert!(validator.validate(&Value::from("67e55044-10b1-426f-9247-bb680e5fe0c8")));
/// assert!(!validator.validate(&Value::from("not-a-uuid")));
/// ```
pub struct UuidValidator;

impl Validate for UuidValidator {
    fn validate(&self, value: &Value) -> bool {
        let Value::Text(text) = value else {
            return false;
        };

        uuid::Uuid::parse_str(text).is_ok()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_url_validator() {
        let validator = UrlValidator;
        assert!(validator.validate(&Value::from("https://www.example.com/path?q=1")));
        assert!(validator.validate(&Value::from("ftp://files.example.com")));
        assert!(!validator.validate(&Value::from("www.example.com")));
        assert!(!validator.validate(&Value::from("")));
        assert!(!validator.validate(&Value::Integer(1)));
    }

    #[test]
    fn test_uuid_validator() {
        let validator = UuidValidator;
        assert!(validator.validate(&Value::from("550e8400-e29b-41d4-a716-446655440000")));
        assert!(!validator.validate(&Value::from("550e8400-e29b-41d4-a716")));
        assert!(!validator.validate(&Value::Null));
    }
}
