//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a directory entry. Each value object
//! validates at construction time so an invalid name or phone number cannot
//! be represented.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::{Field, ValidationError};
pub use name::PersonName;
pub use phone::PhoneNumber;
