use std::collections::HashMap;

/// Overrides for the default rule messages.
///
/// A message is registered either for a rule on a specific field (`"name.required"`), or for
/// a rule on every field (`"required"`). The field-specific message wins.
///
/// ```rust
/// use validatable_rules::prelude::CustomMessages;
///
/// let messages = CustomMessages::new()
///     .with("required", "Please fill in :attribute.")
///     .with("email.required", "We need your email address.");
///
/// assert_eq!(messages.find("email", "required"), Some("We need your email address."));
/// assert_eq!(messages.find("name", "required"), Some("Please fill in :attribute."));
/// assert_eq!(messages.find("name", "max"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomMessages(HashMap<String, String>);

impl CustomMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `message` under `key` (`rule` or `field.rule`).
    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.0.insert(key.into(), message.into());
        self
    }

    /// Looks up the message for `rule` on `field`.
    pub fn find(&self, field: &str, rule: &str) -> Option<&str> {
        self.0
            .get(&format!("{field}.{rule}"))
            .or_else(|| self.0.get(rule))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CustomMessages
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, message)| (key.into(), message.into()))
                .collect(),
        )
    }
}

/// Display names for fields, substituted for `:attribute` in messages.
///
/// Fields without a display name are shown with underscores replaced by spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeNames(HashMap<String, String>);

impl AttributeNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` as display name of `field`.
    pub fn with(mut self, field: impl Into<String>, name: impl Into<String>) -> Self {
        self.0.insert(field.into(), name.into());
        self
    }

    /// Returns the display name of `field`.
    pub fn display(&self, field: &str) -> String {
        self.0
            .get(field)
            .cloned()
            .unwrap_or_else(|| field.replace('_', " "))
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeNames
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, name)| (field.into(), name.into()))
                .collect(),
        )
    }
}
