//! Integration tests for start-up seeding and result rendering.

mod fixtures;

use fixtures::{full_names, sample_directory};
use phonebook::render::{render_error, render_results};
use phonebook::seed::{self, SAMPLE_ENTRIES};
use phonebook::{Directory, ErrorKind, OutputFormat, SeedPolicy};

#[test]
fn test_seeded_directory_answers_queries() {
    let mut directory = Directory::new();
    let report = seed::load(&mut directory, SAMPLE_ENTRIES, SeedPolicy::StopOnError);
    assert!(report.is_clean());

    let results = directory.search("doe");
    assert_eq!(full_names(&results), vec!["John Doe"]);
    let text = render_results(OutputFormat::Text, "doe", &results).unwrap();
    assert_eq!(
        text,
        "Matching entries:\nFirst Name: John, Last Name: Doe, Phone Number: 1234567890"
    );

    let results = directory.search("xyz");
    let text = render_results(OutputFormat::Text, "xyz", &results).unwrap();
    assert_eq!(text, "No matching entries found.");
}

#[test]
fn test_formatted_numbers_fail_to_seed() {
    let formatted: &[(&str, &str, &str)] = &[
        ("John", "Doe", "123-456-7890"),
        ("Jane", "Smith", "234-567-8901"),
    ];

    let mut directory = Directory::new();
    let report = seed::load(&mut directory, formatted, SeedPolicy::StopOnError);
    assert_eq!(report.added, 0);
    assert_eq!(report.failures.len(), 1);

    let text = render_error(OutputFormat::Text, &report.failures[0]).unwrap();
    assert_eq!(
        text,
        "An error occurred: Phone number can only contain digits: 123-456-7890"
    );

    let mut directory = Directory::new();
    let report = seed::load(&mut directory, formatted, SeedPolicy::ContinueOnError);
    assert_eq!(report.failures.len(), 2);
    assert!(report
        .failures
        .iter()
        .all(|e| e.kind() == ErrorKind::InvalidArgument));
    assert!(directory.is_empty());
}

#[test]
fn test_json_output_round_trips_entries() {
    let directory = sample_directory();
    let results = directory.search("");
    let json = render_results(OutputFormat::Json, "", &results).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["count"], 3);

    let parsed: Vec<phonebook::Entry> =
        serde_json::from_value(value["matches"].clone()).unwrap();
    assert_eq!(parsed, directory.entries());
}
