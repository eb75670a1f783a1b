//! Output formatting for search results and errors.
//!
//! The directory hands back plain data; this module turns it into what the
//! user sees, either human-readable text or a JSON document.

use crate::error::{DirectoryError, ErrorKind};
use crate::models::Entry;
use serde::Serialize;
use std::fmt::Write as _;

/// Output format for results and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON shape of a search response.
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub count: usize,
    pub matches: &'a [&'a Entry],
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    kind: ErrorKind,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

/// Render the results of a search for `query`.
pub fn render_results(
    format: OutputFormat,
    query: &str,
    results: &[&Entry],
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(results_text(results)),
        OutputFormat::Json => serde_json::to_string_pretty(&SearchResponse {
            query,
            count: results.len(),
            matches: results,
        }),
    }
}

/// Render an error raised while populating the directory.
pub fn render_error(format: OutputFormat, error: &DirectoryError) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("An error occurred: {}", error)),
        OutputFormat::Json => serde_json::to_string(&ErrorResponse {
            error: ErrorBody {
                kind: error.kind(),
                message: error.to_string(),
            },
        }),
    }
}

fn results_text(results: &[&Entry]) -> String {
    if results.is_empty() {
        return "No matching entries found.".to_string();
    }

    let mut out = String::from("Matching entries:");
    for entry in results {
        // Writing to a String cannot fail
        let _ = write!(out, "\n{}", entry);
    }
    out
}
