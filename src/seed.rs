//! Start-up loading of sample entries.

use crate::directory::Directory;
use crate::error::DirectoryError;

/// The entries loaded into a fresh directory at start-up.
pub const SAMPLE_ENTRIES: &[(&str, &str, &str)] = &[
    ("John", "Doe", "1234567890"),
    ("Jane", "Smith", "2345678901"),
    ("Alice", "Johnson", "3456789012"),
];

/// What to do when an entry fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Stop at the first failure; later entries are not attempted.
    #[default]
    StopOnError,

    /// Attempt every entry and collect all failures.
    ContinueOnError,
}

/// Outcome of [`load`].
#[derive(Debug, Default)]
pub struct SeedReport {
    /// Number of entries successfully added
    pub added: usize,

    /// Failures, in the order they occurred
    pub failures: Vec<DirectoryError>,
}

impl SeedReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Add `entries` to `directory` under `policy`.
pub fn load(
    directory: &mut Directory,
    entries: &[(&str, &str, &str)],
    policy: SeedPolicy,
) -> SeedReport {
    let mut report = SeedReport::default();

    for &(first_name, last_name, phone_number) in entries {
        match directory.add_entry(first_name, last_name, phone_number) {
            Ok(()) => report.added += 1,
            Err(e) => {
                report.failures.push(e);
                if policy == SeedPolicy::StopOnError {
                    break;
                }
            }
        }
    }

    report
}
