//! PhoneNumber value object.

use super::errors::{Field, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for directory phone numbers.
///
/// A phone number is stored exactly as given. It must be non-blank and made
/// up solely of the ASCII digits `0`-`9`; separators such as `-`, spaces or a
/// leading `+` are rejected.
///
/// # Example
///
/// ```
/// use phonebook::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(PhoneNumber::new("123-456-7890").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` for an empty or whitespace-only
    /// value, and `ValidationError::NonDigitPhone` if any character is not a
    /// decimal digit.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if phone.trim().is_empty() {
            return Err(ValidationError::EmptyField(Field::PhoneNumber));
        }

        if !Self::is_digits(&phone) {
            return Err(ValidationError::NonDigitPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_digits(phone: &str) -> bool {
        phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Literal substring containment.
    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
