//! Phonebook - an in-memory contact directory.
//!
//! Entries are validated on insertion, phone numbers are unique, and searches
//! match a substring against first name, last name, or phone number.
//!
//! # Architecture
//!
//! - **app**: The seed, prompt, search, render flow run by the binary
//! - **domain**: Validated value objects for names and phone numbers
//! - **models**: The immutable `Entry` record
//! - **directory**: The `Directory` with `add_entry` and `search`
//! - **seed**: Sample entries loaded at start-up
//! - **render**: Text and JSON output for results and errors
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling
//!
//! # Example
//!
//! ```
//! use phonebook::{Directory, ErrorKind};
//!
//! let mut directory = Directory::new();
//! directory.add_entry("John", "Doe", "1234567890").unwrap();
//!
//! let err = directory.add_entry("Bob", "Brown", "1234567890").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DuplicateEntry);
//!
//! assert_eq!(directory.search("DOE").len(), 1);
//! ```

pub mod app;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod render;
pub mod seed;

pub use config::Config;
pub use directory::Directory;
pub use domain::{Field, PersonName, PhoneNumber, ValidationError};
pub use error::{ConfigError, DirectoryError, DirectoryResult, ErrorKind};
pub use models::Entry;
pub use render::OutputFormat;
pub use seed::{SeedPolicy, SeedReport};
