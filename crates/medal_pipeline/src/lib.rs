//! medal_pipeline — orchestration of one standings view session
//! (fetch → validate → rank), plus the fetch lifecycle rules.
//!
//! Single-threaded and cooperative: ranking is synchronous and never
//! suspends; the only asynchronous boundary is data acquisition, modeled as
//! at most one fetch in flight per session. A completion is applied only if
//! it matches the outstanding generation — results arriving after a refetch
//! superseded them, or after the session closed, are discarded rather than
//! merged.

#![forbid(unsafe_code)]

use thiserror::Error;

use medal_core::{MedalRecord, QueryParams, SortConfig, SortKey, SortState};
use medal_io::{IoError, MedalSource};
use medal_rank::rank;

/// Single error surface for the pipeline.
///
/// Transport failures and payload rejections are distinguished for
/// diagnostics but share one user-visible message; both are recoverable
/// (the caller may retry).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("payload rejected: {0}")]
    Malformed(String),
}

impl PipelineError {
    /// The single message shown to users for any failed acquisition.
    pub fn user_message(&self) -> &'static str {
        "Error retrieving medals data. Please try again later."
    }
}

impl From<IoError> for PipelineError {
    fn from(e: IoError) -> Self {
        if e.is_fetch_failure() {
            PipelineError::Fetch(e.to_string())
        } else {
            PipelineError::Malformed(e.to_string())
        }
    }
}

/// Opaque handle for one fetch attempt. A completion is applied only when
/// its ticket still matches the session's outstanding fetch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FetchTicket {
    generation: u64,
}

/// What happened to a delivered fetch result.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Dataset replaced wholesale (no merge with the prior result).
    Applied { records: usize },
    /// Acquisition failed; prior dataset kept, error handed back.
    Failed(PipelineError),
    /// Stale or post-close completion; dropped without effect.
    Discarded,
}

/// One standings view session.
///
/// Owns the live `SortConfig` (sole writer), the current dataset, and the
/// fetch generation counter. Raw records are kept as fetched; ranking is a
/// pure transform applied on demand.
#[derive(Debug, Default)]
pub struct MedalSession {
    sort: SortState,
    records: Vec<MedalRecord>,
    generation: u64,
    in_flight: Option<u64>,
    closed: bool,
}

impl MedalSession {
    pub fn new(config: SortConfig) -> Self {
        MedalSession {
            sort: SortState::new(config),
            ..MedalSession::default()
        }
    }

    /// Restore the sort config from a shared query-parameter bag.
    pub fn from_params(params: &QueryParams) -> Self {
        MedalSession::new(SortConfig::from_params(params))
    }

    pub fn config(&self) -> SortConfig {
        self.sort.config()
    }

    /// Raw dataset in fetch order.
    pub fn records(&self) -> &[MedalRecord] {
        &self.records
    }

    /// Ranked snapshot under the current config.
    pub fn ranked(&self) -> Vec<MedalRecord> {
        rank(&self.records, self.sort.config())
    }

    /// Apply a user sort intent; returns the new config so the caller can
    /// mirror it into the shareable representation.
    pub fn handle_sort(&mut self, key: SortKey) -> SortConfig {
        self.sort.apply_sort_request(key)
    }

    /// Mirror the current config into `params` (unrelated entries kept).
    pub fn sync_params(&self, params: &mut QueryParams) {
        self.sort.sync_params(params);
    }

    /// Start a fetch if none is outstanding. Returns `None` while a fetch is
    /// in flight or after `close()`; use [`begin_refetch`] to supersede.
    ///
    /// [`begin_refetch`]: MedalSession::begin_refetch
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.closed || self.in_flight.is_some() {
            return None;
        }
        Some(self.issue_ticket())
    }

    /// Explicit refetch: always issues a new ticket, invalidating any
    /// outstanding one (its completion will be discarded).
    pub fn begin_refetch(&mut self) -> Option<FetchTicket> {
        if self.closed {
            return None;
        }
        Some(self.issue_ticket())
    }

    fn issue_ticket(&mut self) -> FetchTicket {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        tracing::debug!(generation = self.generation, "fetch started");
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Deliver a fetch result. Applied only when `ticket` matches the
    /// outstanding generation; a successful application replaces the prior
    /// dataset entirely.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<MedalRecord>, IoError>,
    ) -> FetchOutcome {
        if self.closed || self.in_flight != Some(ticket.generation) {
            tracing::warn!(
                generation = ticket.generation,
                closed = self.closed,
                "discarding stale fetch result"
            );
            return FetchOutcome::Discarded;
        }
        self.in_flight = None;
        match result {
            Ok(records) => {
                let n = records.len();
                self.records = records;
                tracing::debug!(records = n, "dataset replaced");
                FetchOutcome::Applied { records: n }
            }
            Err(e) => FetchOutcome::Failed(e.into()),
        }
    }

    pub fn fetch_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// End the view session: any outstanding fetch result will be discarded.
    pub fn close(&mut self) {
        self.closed = true;
        self.in_flight = None;
    }
}

/// One-shot path for batch callers (CLI): fetch, validate, rank.
pub fn run_once(
    source: &dyn MedalSource,
    config: SortConfig,
) -> Result<Vec<MedalRecord>, PipelineError> {
    let records = source.fetch_medals()?;
    Ok(rank(&records, config))
}
