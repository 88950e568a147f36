use tracing::debug;
use validatable_rules::prelude::{
    AttributeNames, CustomMessages, FieldValues, MessageBag, RuleSpec, Validator,
};

use crate::error::{ValidationFailed, ValidationResult};
use crate::state::{ValidationState, ValidationStatus};

/// What [`Validatable::validate_with`] does when the entity fails its rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FailureMode {
    /// Return [`crate::prelude::ValidationError::Failed`], leaving the stored outcome untouched.
    #[default]
    Throw,
    /// Store the messages on the entity and return `Ok(false)`.
    Collect,
}

/// Trait for entities validating their own fields against the rules they declare.
///
/// Implementors provide the rules and the values to check, and embed a [`ValidationState`]
/// where the outcome of the last validation is stored.
///
/// ```rust
/// use validatable_model::prelude::*;
///
/// struct Contact {
///     name: String,
///     email: String,
///     validation: ValidationState,
/// }
///
/// impl Validatable for Contact {
///     fn rules(&self) -> RuleSpec {
///         RuleSpec::new()
///             .field("name", "required|max:75|min:2")
///             .field("email", "email")
///     }
///
///     fn fields(&self) -> FieldValues {
///         FieldValues::new()
///             .with("name", self.name.as_str())
///             .with("email", self.email.as_str())
///     }
///
///     fn validation_state(&self) -> &ValidationState {
///         &self.validation
///     }
///
///     fn validation_state_mut(&mut self) -> &mut ValidationState {
///         &mut self.validation
///     }
/// }
///
/// let mut contact = Contact {
///     name: "A".to_string(),
///     email: "s".to_string(),
///     validation: ValidationState::default(),
/// };
///
/// assert!(contact.validate().is_err());
/// assert!(contact.get_errors().is_empty());
///
/// assert!(!contact.validate_with(FailureMode::Collect).unwrap());
/// assert!(contact.get_errors().has("name"));
/// assert!(contact.get_errors().has("email"));
/// ```
pub trait Validatable {
    /// The rules the fields must satisfy.
    fn rules(&self) -> RuleSpec;

    /// The values checked against [`Validatable::rules`].
    fn fields(&self) -> FieldValues;

    /// The embedded storage of the last validation outcome.
    fn validation_state(&self) -> &ValidationState;

    /// Mutable access to the embedded [`ValidationState`], written by
    /// [`Validatable::validate_with`].
    fn validation_state_mut(&mut self) -> &mut ValidationState;

    /// Messages overriding the default ones, by `rule` or `field.rule`.
    fn messages(&self) -> CustomMessages {
        CustomMessages::default()
    }

    /// Display names of the fields, used in messages.
    fn attributes(&self) -> AttributeNames {
        AttributeNames::default()
    }

    /// Validates the entity, returning [`crate::prelude::ValidationError::Failed`] if any rule
    /// fails.
    fn validate(&mut self) -> ValidationResult<bool> {
        self.validate_with(FailureMode::Throw)
    }

    /// Validates the entity against its rules.
    ///
    /// A passing validation stores an empty [`MessageBag`] and returns `Ok(true)` in both modes.
    /// A failing one either returns the messages as an error ([`FailureMode::Throw`]) or stores
    /// them and returns `Ok(false)` ([`FailureMode::Collect`]).
    ///
    /// Rules that cannot be compiled are reported as [`crate::prelude::ValidationError::Rule`]
    /// in both modes, and leave the stored outcome untouched.
    fn validate_with(&mut self, mode: FailureMode) -> ValidationResult<bool> {
        let validator = Validator::builder(self.fields(), self.rules())
            .messages(self.messages())
            .attributes(self.attributes())
            .build()?;

        let passes = validator.passes();
        if !passes && mode == FailureMode::Throw {
            debug!(
                failed = validator.errors().field_count(),
                "entity failed validation"
            );
            return Err(ValidationFailed::new(validator.into_errors()).into());
        }

        self.validation_state_mut().store(validator.into_errors());
        Ok(passes)
    }

    /// Returns the messages stored by the last validation; empty before any.
    fn get_errors(&self) -> &MessageBag {
        self.validation_state().errors()
    }

    /// Returns the status stored by the last validation.
    fn validation_status(&self) -> ValidationStatus {
        self.validation_state().status()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::error::ValidationError;

    #[derive(Default)]
    struct Account {
        username: Option<String>,
        age: Option<i64>,
        rules: Option<&'static str>,
        validation: ValidationState,
    }

    impl Validatable for Account {
        fn rules(&self) -> RuleSpec {
            RuleSpec::new()
                .field("username", self.rules.unwrap_or("required|alpha_dash|between:3,16"))
                .field("age", "nullable|integer|min:18")
        }

        fn fields(&self) -> FieldValues {
            FieldValues::new()
                .with("username", self.username.clone())
                .with("age", self.age)
        }

        fn validation_state(&self) -> &ValidationState {
            &self.validation
        }

        fn validation_state_mut(&mut self) -> &mut ValidationState {
            &mut self.validation
        }

        fn attributes(&self) -> AttributeNames {
            AttributeNames::new().with("username", "user name")
        }
    }

    fn account(username: &str, age: Option<i64>) -> Account {
        Account {
            username: Some(username.to_string()),
            age,
            ..Default::default()
        }
    }

    #[test]
    fn test_should_pass_and_store_empty_errors() {
        let mut account = account("klaus_42", Some(30));
        assert!(account.validate().unwrap());
        assert_eq!(account.validation_status(), ValidationStatus::Passed);
        assert!(account.get_errors().is_empty());

        assert!(account.validate_with(FailureMode::Collect).unwrap());
        assert_eq!(account.validation_status(), ValidationStatus::Passed);
    }

    #[test]
    fn test_should_skip_null_age() {
        let mut account = account("klaus_42", None);
        assert!(account.validate().unwrap());
    }

    #[test]
    fn test_should_throw_without_touching_state() {
        let mut account = account("kl", Some(12));

        let Err(ValidationError::Failed(failed)) = account.validate() else {
            panic!("expected a validation failure");
        };
        assert_eq!(
            failed.errors().first("username"),
            Some("The user name field must be between 3 and 16 characters.")
        );
        assert_eq!(
            failed.errors().first("age"),
            Some("The age field must be at least 18.")
        );
        assert_eq!(account.validation_status(), ValidationStatus::Unvalidated);
        assert!(account.get_errors().is_empty());
    }

    #[test]
    fn test_should_keep_previous_outcome_after_throwing() {
        let mut account = account("kl", None);
        assert!(!account.validate_with(FailureMode::Collect).unwrap());
        let collected = account.get_errors().clone();

        account.username = Some("k".to_string());
        assert!(account.validate().is_err());
        assert_eq!(account.validation_status(), ValidationStatus::Failed);
        assert_eq!(account.get_errors(), &collected);
    }

    #[test]
    fn test_should_collect_and_then_clear_errors() {
        let mut account = account("kl", None);
        assert!(!account.validate_with(FailureMode::Collect).unwrap());
        assert_eq!(account.validation_status(), ValidationStatus::Failed);
        assert!(account.get_errors().has("username"));

        account.username = Some("klaus".to_string());
        assert!(account.validate().unwrap());
        assert_eq!(account.validation_status(), ValidationStatus::Passed);
        assert!(account.get_errors().is_empty());
    }

    #[test]
    fn test_should_report_missing_required_field() {
        let mut account = Account::default();
        assert!(!account.validate_with(FailureMode::Collect).unwrap());
        assert_eq!(
            account.get_errors().get("username"),
            &["The user name field is required.".to_string()]
        );
    }

    #[test]
    fn test_should_propagate_rule_errors_in_both_modes() {
        let mut account = Account {
            rules: Some("required|between:3"),
            ..account("klaus", None)
        };

        assert!(matches!(account.validate(), Err(ValidationError::Rule(_))));
        assert!(matches!(
            account.validate_with(FailureMode::Collect),
            Err(ValidationError::Rule(_))
        ));
        assert_eq!(account.validation_status(), ValidationStatus::Unvalidated);
    }

    #[test]
    fn test_default_failure_mode_is_throw() {
        assert_eq!(FailureMode::default(), FailureMode::Throw);
    }
}
