//! Entry model representing one contact in the phone book.

use crate::domain::{Field, PersonName, PhoneNumber, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single phone book entry.
///
/// Entries are immutable once built: every field is validated by
/// [`Entry::new`] and there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    first_name: PersonName,
    last_name: PersonName,
    phone_number: PhoneNumber,
}

impl Entry {
    /// Build an entry, validating every field.
    ///
    /// All three fields are checked for blankness before the phone number's
    /// digits are inspected, so a blank name is reported ahead of a malformed
    /// phone number.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = PersonName::new(Field::FirstName, first_name)?;
        let last_name = PersonName::new(Field::LastName, last_name)?;
        let phone_number = PhoneNumber::new(phone_number)?;

        Ok(Self {
            first_name,
            last_name,
            phone_number,
        })
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    /// Whether this entry matches a search query.
    ///
    /// `lowered` must be `query.to_lowercase()`; names are compared against it
    /// while the phone number is compared against the literal `query`.
    pub(crate) fn matches(&self, query: &str, lowered: &str) -> bool {
        self.first_name.contains_lowercase(lowered)
            || self.last_name.contains_lowercase(lowered)
            || self.phone_number.contains(query)
    }
}

/// Wire form used to re-run validation on deserialization.
#[derive(Deserialize)]
struct RawEntry {
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEntry::deserialize(deserializer)?;
        Entry::new(raw.first_name, raw.last_name, raw.phone_number)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "First Name: {}, Last Name: {}, Phone Number: {}",
            self.first_name, self.last_name, self.phone_number
        )
    }
}
