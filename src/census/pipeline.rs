//! Sequential census pipeline executor.
//!
//! This module provides the [`CensusPipeline`] coordinator that drives the
//! one-way stage chain (LineSource → extraction → tally → ranking → report)
//! with:
//! - Async execution via `tokio` (the only await point is the next line)
//! - Structured logging via `tracing`
//! - Run statistics in [`CensusStats`]
//!
//! The chain is strictly sequential: no stage reads ahead or backtracks, and
//! there is no timeout or cancellation — the run ends when the external
//! command's output does.

use std::io::Write;
use std::time::Instant;

use thiserror::Error;
use tracing::info;

use crate::census::extract;
use crate::census::report;
use crate::census::tally::ProductTally;
use crate::model::CensusSummary;
use crate::traits::{LineSource, SourceError};

// ============================================================================
// Pipeline Errors
// ============================================================================

/// Errors that can occur during a census run.
#[derive(Error, Debug)]
pub enum CensusError {
    /// The search stream could not be started or read
    #[error("Search stream failed: {0}")]
    Source(#[from] SourceError),

    /// Writing the report to the output sink failed
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

// ============================================================================
// Pipeline Types
// ============================================================================

/// Statistics about one census run.
#[derive(Debug, Default, Clone)]
pub struct CensusStats {
    /// Raw lines consumed from the search stream
    pub lines_scanned: u64,

    /// Lines that yielded a non-empty archive identifier. Equals the sum of
    /// all per-archive counts.
    pub lines_counted: u64,

    /// Distinct archive identifiers seen
    pub distinct_archives: usize,

    /// Wall-clock duration of the scan (milliseconds)
    pub scan_duration_ms: u64,
}

/// Complete result of a census run.
#[derive(Debug)]
pub struct CensusReport {
    /// Ranked summary, ready for text or JSON output
    pub summary: CensusSummary,

    /// Processing statistics
    pub stats: CensusStats,
}

impl CensusReport {
    /// Writes the grouped text report for this run.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<(), CensusError> {
        report::write_report(out, &self.summary.archives, self.summary.max_product_len)?;
        Ok(())
    }
}

// ============================================================================
// Pipeline Executor
// ============================================================================

/// Drives a [`LineSource`] to exhaustion and produces the ranked census.
///
/// The source is consumed: it is read once and cannot be restarted, so the
/// pipeline takes it by value and `execute` takes `self`.
pub struct CensusPipeline<S: LineSource> {
    source: S,
}

impl<S: LineSource> CensusPipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Executes the complete census over the stream.
    ///
    /// Every line is extracted and folded into the tally exactly once, in
    /// stream order. Malformed lines degrade to absent fields and are never
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Source`] if reading the stream fails. A stream
    /// that is merely empty yields a degenerate report, not an error.
    pub async fn execute(mut self) -> Result<CensusReport, CensusError> {
        let start = Instant::now();
        info!("Starting census scan");

        let mut tally = ProductTally::new();
        let mut lines_scanned = 0u64;
        while let Some(line) = self.source.next_line().await? {
            lines_scanned += 1;
            tally.record(extract::extract(&line));
        }

        let stats = CensusStats {
            lines_scanned,
            lines_counted: tally.total_counted(),
            distinct_archives: tally.distinct_archives(),
            scan_duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            lines = stats.lines_scanned,
            counted = stats.lines_counted,
            archives = stats.distinct_archives,
            duration_ms = stats.scan_duration_ms,
            "Census scan completed"
        );

        let summary = CensusSummary {
            archives: tally.ranked(),
            max_product_len: tally.max_product_len(),
        };

        Ok(CensusReport { summary, stats })
    }
}

// ============================================================================
// Tests
// ============================================================================
