//! PersonName value object.

use super::errors::{Field, ValidationError};
use serde::Serialize;
use std::fmt;

/// A first or last name.
///
/// The raw input is kept verbatim, surrounding whitespace included; only the
/// emptiness check looks at the trimmed value.
///
/// # Example
///
/// ```
/// use phonebook::domain::{Field, PersonName};
///
/// let name = PersonName::new(Field::FirstName, " John").unwrap();
/// assert_eq!(name.as_str(), " John");
/// assert!(PersonName::new(Field::LastName, "  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName for `field`, rejecting blank input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField(field)` if the value is empty or
    /// whitespace-only.
    pub fn new(field: Field, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField(field));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive containment against an already lowercased needle.
    pub(crate) fn contains_lowercase(&self, lowered_needle: &str) -> bool {
        self.0.to_lowercase().contains(lowered_needle)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_keeps_raw_value() {
        let name = PersonName::new(Field::LastName, "  Doe ").unwrap();
        assert_eq!(name.as_str(), "  Doe ");
    }

    #[test]
    fn test_name_rejects_blank() {
        assert_eq!(
            PersonName::new(Field::FirstName, ""),
            Err(ValidationError::EmptyField(Field::FirstName))
        );
        assert_eq!(
            PersonName::new(Field::LastName, " \n "),
            Err(ValidationError::EmptyField(Field::LastName))
        );
    }

    #[test]
    fn test_name_contains_lowercase() {
        let name = PersonName::new(Field::LastName, "JohnSON").unwrap();
        assert!(name.contains_lowercase("john"));
        assert!(name.contains_lowercase("son"));
        assert!(name.contains_lowercase(""));
        assert!(!name.contains_lowercase("doe"));
    }
}
