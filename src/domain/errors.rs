//! Domain validation errors.

use std::fmt;

/// The entry field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    PhoneNumber,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstName => write!(f, "First name"),
            Self::LastName => write!(f, "Last name"),
            Self::PhoneNumber => write!(f, "Phone number"),
        }
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was empty or contained only whitespace.
    EmptyField(Field),

    /// The phone number contained something other than the digits 0-9.
    NonDigitPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{} cannot be empty or null", field),
            Self::NonDigitPhone(phone) => {
                write!(f, "Phone number can only contain digits: {}", phone)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
