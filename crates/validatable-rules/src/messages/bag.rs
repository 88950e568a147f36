use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Validation error messages grouped by field.
///
/// Fields keep the order in which they first failed, and each field keeps its messages in the
/// order its rules were evaluated.
///
/// ```rust
/// use validatable_rules::prelude::MessageBag;
///
/// let mut errors = MessageBag::new();
/// errors.add("name", "The name field is required.");
/// errors.add("email", "The email field must be a valid email address.");
///
/// assert!(errors.has("name"));
/// assert_eq!(errors.first("email"), Some("The email field must be a valid email address."));
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBag {
    messages: Vec<(String, Vec<String>)>,
}

impl MessageBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` to the messages of `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.messages.iter_mut().find(|(key, _)| *key == field) {
            Some((_, messages)) => messages.push(message),
            None => self.messages.push((field, vec![message])),
        }
    }

    /// Appends every message of `other`, field by field.
    pub fn merge(&mut self, other: MessageBag) {
        for (field, messages) in other.messages {
            for message in messages {
                self.add(field.clone(), message);
            }
        }
    }

    /// Returns whether `field` has at least one message.
    pub fn has(&self, field: &str) -> bool {
        self.messages.iter().any(|(key, _)| key == field)
    }

    /// Returns the messages of `field`; empty if the field has none.
    pub fn get(&self, field: &str) -> &[String] {
        self.messages
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or_default()
    }

    /// Returns the first message of `field`.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }

    /// Returns the first message of the bag.
    pub fn first_message(&self) -> Option<&str> {
        self.messages
            .first()
            .and_then(|(_, messages)| messages.first())
            .map(String::as_str)
    }

    /// Returns the fields with at least one message.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|(field, _)| field.as_str())
    }

    /// Returns every message, flattened.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.messages
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Total number of messages.
    pub fn len(&self) -> usize {
        self.messages.iter().map(|(_, messages)| messages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of fields with at least one message.
    pub fn field_count(&self) -> usize {
        self.messages.len()
    }

    /// Converts the bag into a map sorted by field name.
    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        self.messages.iter().cloned().collect()
    }
}

impl IntoIterator for MessageBag {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for MessageBag
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = MessageBag::new();
        for (field, message) in iter {
            bag.add(field, message);
        }
        bag
    }
}

impl fmt::Display for MessageBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.all().collect::<Vec<_>>().join(", "))
    }
}

impl Serialize for MessageBag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.messages.len()))?;
        for (field, messages) in &self.messages {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MessageBag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MessageBagVisitor;

        impl<'de> Visitor<'de> for MessageBagVisitor {
            type Value = MessageBag;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of field names to lists of messages")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut bag = MessageBag::new();
                while let Some((field, messages)) = access.next_entry::<String, Vec<String>>()? {
                    if messages.is_empty() {
                        return Err(<A::Error as de::Error>::invalid_length(
                            0,
                            &"at least one message",
                        ));
                    }
                    for message in messages {
                        bag.add(field.clone(), message);
                    }
                }
                Ok(bag)
            }
        }

        deserializer.deserialize_map(MessageBagVisitor)
    }
}
