//! The interactive flow behind the binary: seed, prompt, read, search, render.
//!
//! In text mode everything the user sees goes to `out`. In JSON mode `out`
//! carries exactly one JSON document, the search response; the prompt and any
//! seeding errors go to `err` instead.

use crate::config::Config;
use crate::directory::Directory;
use crate::render::{render_error, render_results, OutputFormat};
use crate::seed;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

pub const PROMPT: &str = "Enter first/last name or phone number to search: ";

/// Seed a fresh directory from `entries`, prompt, answer one query from
/// `input`, and write the results.
pub fn run(
    config: &Config,
    entries: &[(&str, &str, &str)],
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let json = config.output_format == OutputFormat::Json;
    let mut directory = Directory::new();

    if config.seed_samples {
        let report = seed::load(&mut directory, entries, config.seed_policy);
        for failure in &report.failures {
            warn!(kind = %failure.kind(), "Failed to add sample entry: {}", failure);
            let rendered = render_error(config.output_format, failure)?;
            if json {
                writeln!(err, "{}", rendered)?;
            } else {
                writeln!(out, "{}", rendered)?;
            }
        }
        info!(
            "Loaded {} sample entries ({} failed)",
            report.added,
            report.failures.len()
        );
    }

    if json {
        write!(err, "{}", PROMPT)?;
        err.flush()?;
    } else {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    let query = read_query(input).context("Failed to read search query")?;
    let results = directory.search(&query);
    debug!(query = %query, matches = results.len(), "Search complete");

    let rendered = render_results(config.output_format, &query, &results)
        .context("Failed to render results")?;
    writeln!(out, "{}", rendered)?;
    out.flush()?;

    Ok(())
}

/// Read one line, stripping its terminator.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected. End of input
/// yields an empty query.
pub fn read_query(mut input: impl BufRead) -> io::Result<String> {
    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
