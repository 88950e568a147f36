//! Example validatable entity: a contact with a name and an email address.

use serde::{Deserialize, Serialize};
use validatable_model::prelude::*;

/// Names of up to three words, made of letters, apostrophes and backticks, separated by spaces
/// or dashes.
const NAME_PATTERN: &str = r"regex:/^([\p{L}'`]*[\s\-]?){1,3}$/u";
/// Rejects runs of two or more separators.
const NAME_NOT_PATTERN: &str = r"not_regex:/[-`']{2,}/";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip)]
    validation: ValidationState,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            validation: ValidationState::default(),
        }
    }
}

impl Validatable for Contact {
    fn rules(&self) -> RuleSpec {
        RuleSpec::new()
            .field(
                "name",
                ["required", "max:75", "min:2", NAME_PATTERN, NAME_NOT_PATTERN],
            )
            .field("email", "email")
    }

    fn fields(&self) -> FieldValues {
        FieldValues::new()
            .with("name", self.name.as_deref())
            .with("email", self.email.as_deref())
            .only(self.present_fields())
    }

    fn validation_state(&self) -> &ValidationState {
        &self.validation
    }

    fn validation_state_mut(&mut self) -> &mut ValidationState {
        &mut self.validation
    }
}

impl Contact {
    /// Fields left out of the JSON input count as absent, not null.
    fn present_fields(&self) -> Vec<&'static str> {
        [("name", self.name.is_some()), ("email", self.email.is_some())]
            .into_iter()
            .filter_map(|(field, present)| present.then_some(field))
            .collect()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_validate_contact() {
        let mut contact = Contact::new("Jeanne d'Arc", "an_gebrich@outlook.com");
        assert!(contact.validate().unwrap());
    }

    #[test]
    fn test_should_skip_absent_email() {
        let mut contact: Contact = serde_json::from_str(r#"{"name": "Klaus"}"#).unwrap();
        assert!(contact.validate().unwrap());
    }

    #[test]
    fn test_should_collect_contact_errors() {
        let mut contact: Contact = serde_json::from_str(r#"{"email": "myemail"}"#).unwrap();
        assert!(!contact.validate_with(FailureMode::Collect).unwrap());
        assert_eq!(
            contact.get_errors().first("name"),
            Some("The name field is required.")
        );
        assert_eq!(
            contact.get_errors().first("email"),
            Some("The email field must be a valid email address.")
        );
    }
}
