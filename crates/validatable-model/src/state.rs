use validatable_rules::prelude::MessageBag;

/// Outcome of the last validation of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValidationStatus {
    /// Never validated, or only through failed throwing validations.
    #[default]
    Unvalidated,
    /// Every rule passed.
    Passed,
    /// At least one rule failed; the messages are stored.
    Failed,
}

/// Per-entity storage of the last validation outcome.
///
/// Entities implementing [`crate::prelude::Validatable`] embed one, initialized with
/// [`ValidationState::default`], and expose it through the accessor methods of the trait.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    status: ValidationStatus,
    errors: MessageBag,
}

impl ValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the status of the last stored validation.
    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    /// Returns the messages of the last stored validation; empty if none.
    pub fn errors(&self) -> &MessageBag {
        &self.errors
    }

    /// Replaces the stored outcome with `errors`.
    pub(crate) fn store(&mut self, errors: MessageBag) {
        self.status = if errors.is_empty() {
            ValidationStatus::Passed
        } else {
            ValidationStatus::Failed
        };
        self.errors = errors;
    }

    /// Forgets the stored outcome.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_start_empty() {
        let state = ValidationState::new();
        assert_eq!(state.status(), ValidationStatus::Unvalidated);
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_should_store_outcome() {
        let mut state = ValidationState::new();

        let mut errors = MessageBag::new();
        errors.add("email", "The email field must be a valid email address.");
        state.store(errors.clone());
        assert_eq!(state.status(), ValidationStatus::Failed);
        assert_eq!(state.errors(), &errors);

        state.store(MessageBag::new());
        assert_eq!(state.status(), ValidationStatus::Passed);
        assert!(state.errors().is_empty());

        state.reset();
        assert_eq!(state.status(), ValidationStatus::Unvalidated);
    }
}
