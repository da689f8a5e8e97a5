//! Fuzzy search pipeline over book records
//!
//! Two stages, evaluated in sequence: a cheap candidate filter that admits
//! records whose fields contain the query as a case-insensitive character
//! subsequence, then a scoring pass that ranks the survivors. The pipeline
//! is stateless; each call reads an immutable record snapshot and produces
//! a fresh result set.

pub mod filter;
pub mod rank;
pub mod score;

pub use filter::filter_candidates;
pub use rank::{rank_matches, FieldMatch, RankedResults, ScoredBook};

use crate::models::{Book, SearchField};
use thiserror::Error;

/// Default maximum number of ranked results returned to the caller.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Default score threshold. Permissive: the candidate filter already
/// guarantees structural matchability, so nearly all survivors pass.
pub const DEFAULT_SCORE_THRESHOLD: i64 = -1000;

/// Tuning knobs for the ranking stage.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub max_results: usize,
    pub score_threshold: i64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }
}

/// Search pipeline outcomes that are not ranked results.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was empty. Callers validate before invoking the pipeline;
    /// this is the explicit failure for the case where they did not.
    #[error("query must not be empty")]
    EmptyQuery,

    /// The candidate filter admitted zero records. Not a failure: a
    /// distinct "no matches" outcome the caller renders as such.
    #[error("no records matched the query")]
    NoMatch,

    /// The admission pattern could not be built (e.g. regex size limit).
    #[error("failed to build match pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Run both pipeline stages: filter the record set down to candidates,
/// then score, rank and truncate them.
pub fn run_search(
    query: &str,
    fields: &[SearchField],
    records: Vec<Book>,
    options: &SearchOptions,
) -> Result<RankedResults, SearchError> {
    let candidates = filter_candidates(query, fields, records)?;
    Ok(rank_matches(query, fields, candidates, options))
}
