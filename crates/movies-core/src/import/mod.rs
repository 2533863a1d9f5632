//! CSV import of award nominees.
//!
//! The source list is a delimited file with a header row naming the
//! `year`, `title`, `studios`, `producers` and `winner` columns. Rows that
//! cannot be decoded are skipped and logged; a bad row never aborts the
//! import.

mod record;

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::warn;

use crate::domain::NewMovie;
use crate::ports::CoreError;

pub use record::MovieRecord;

/// Default column separator of the nominee list.
pub const DEFAULT_SEPARATOR: u8 = b';';

/// Outcome of parsing a nominee list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows decoded into movies, in file order.
    pub movies: Vec<NewMovie>,
    /// Number of data rows that were skipped.
    pub skipped: usize,
}

/// Parse a nominee list from any reader.
///
/// Header names are matched case-insensitively and surrounding whitespace
/// is ignored in every field. Rows whose field count differs from the
/// header row are skipped. Fails only when the header row itself cannot
/// be read.
pub fn parse_movies<R: Read>(reader: R, separator: u8) -> Result<ImportReport, CoreError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(separator)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| CoreError::Import(format!("Failed to read CSV headers: {e}")))?;
    let headers: StringRecord = headers.iter().map(str::to_ascii_lowercase).collect();

    let mut report = ImportReport::default();

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable CSV row");
                report.skipped += 1;
                continue;
            }
        };
        let line = record.position().map_or(0, csv::Position::line);

        if record.len() != headers.len() {
            warn!(
                line,
                expected = headers.len(),
                found = record.len(),
                "Skipping CSV row with wrong field count"
            );
            report.skipped += 1;
            continue;
        }

        match record
            .deserialize::<MovieRecord>(Some(&headers))
            .map_err(|e| e.to_string())
            .and_then(MovieRecord::into_new_movie)
        {
            Ok(movie) => report.movies.push(movie),
            Err(reason) => {
                warn!(line, %reason, "Skipping invalid CSV row");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Interpret the `winner` column.
///
/// Accepts the boolean spellings a relational engine would coerce to
/// `TRUE`; everything else, including an empty cell, is a loss.
pub fn parse_winner(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "t" | "1"
    )
}
