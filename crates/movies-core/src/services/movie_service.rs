//! Movie service - orchestrates nominee import and award queries.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use super::intervals::compute_award_intervals;
use crate::domain::AwardIntervals;
use crate::import::{ImportReport, parse_movies};
use crate::ports::{CoreError, MovieRepository};

/// Result of loading a nominee list into the repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows stored.
    pub imported: usize,
    /// Rows rejected by the parser.
    pub skipped: usize,
}

/// Service for nominee operations.
pub struct MovieService {
    repo: Arc<dyn MovieRepository>,
}

impl MovieService {
    /// Create a new movie service.
    pub fn new(repo: Arc<dyn MovieRepository>) -> Self {
        Self { repo }
    }

    /// Load a nominee list from disk and store every valid row.
    ///
    /// The stored table is replaced, so importing the same list twice
    /// leaves one copy of each nominee.
    pub async fn import_csv(&self, path: &Path, separator: u8) -> Result<ImportSummary, CoreError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CoreError::Import(format!("{}: {e}", path.display())))?;

        let report = parse_movies(bytes.as_slice(), separator)?;
        self.store(report).await
    }

    /// Store an already-parsed nominee list, replacing any previous import.
    pub async fn store(&self, report: ImportReport) -> Result<ImportSummary, CoreError> {
        let imported = self.repo.replace_all(&report.movies).await?;

        info!(imported, skipped = report.skipped, "Nominee list imported");
        Ok(ImportSummary {
            imported,
            skipped: report.skipped,
        })
    }

    /// Compute the shortest and longest intervals between wins.
    pub async fn award_intervals(&self) -> Result<AwardIntervals, CoreError> {
        let winners = self.repo.list_winners().await?;
        debug!(winners = winners.len(), "Computing award intervals");
        Ok(compute_award_intervals(&winners))
    }

    /// Count stored movies.
    pub async fn count(&self) -> Result<i64, CoreError> {
        Ok(self.repo.count().await?)
    }
}
