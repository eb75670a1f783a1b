//! Shared test data for directory integration tests.

use phonebook::{Directory, Entry};

/// A directory pre-loaded with John Doe, Jane Smith, and Alice Johnson.
pub fn sample_directory() -> Directory {
    let mut directory = Directory::new();
    directory
        .add_entry("John", "Doe", "1234567890")
        .expect("sample entry should be valid");
    directory
        .add_entry("Jane", "Smith", "2345678901")
        .expect("sample entry should be valid");
    directory
        .add_entry("Alice", "Johnson", "3456789012")
        .expect("sample entry should be valid");
    directory
}

/// Names of the entries in `results`, as "First Last".
pub fn full_names(results: &[&Entry]) -> Vec<String> {
    results
        .iter()
        .map(|e| format!("{} {}", e.first_name(), e.last_name()))
        .collect()
}
